use crate::domain::model::{ExportFormat, InputSlot, RawTable};
use crate::utils::error::{DriftError, Result};

pub const LINKEDIN_FIRST_NAME: &str = "First Name";
pub const LINKEDIN_LAST_NAME: &str = "Last Name";
pub const LINKEDIN_TITLE: &str = "Position";
pub const LINKEDIN_COMPANY: &str = "Company";

pub const BULLHORN_NAME: &str = "Naam";
pub const BULLHORN_TITLE: &str = "Huidige functietitel";
pub const BULLHORN_COMPANY: &str = "Bedrijf";

fn has_all<S: AsRef<str>>(columns: &[S], required: &[&str]) -> bool {
    required
        .iter()
        .all(|name| columns.iter().any(|c| c.as_ref() == *name))
}

fn signatures<S: AsRef<str>>(columns: &[S]) -> (bool, bool) {
    (
        has_all(columns, &[LINKEDIN_FIRST_NAME, LINKEDIN_LAST_NAME]),
        has_all(columns, &[BULLHORN_NAME, BULLHORN_TITLE]),
    )
}

/// Classifies a header set. `None` means unrecognized: neither signature is
/// present, or both are and the table is ambiguous.
pub fn detect_format<S: AsRef<str>>(columns: &[S]) -> Option<ExportFormat> {
    match signatures(columns) {
        (true, false) => Some(ExportFormat::LinkedIn),
        (false, true) => Some(ExportFormat::Bullhorn),
        _ => None,
    }
}

/// Which input slot holds which export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    pub linkedin: InputSlot,
    pub bullhorn: InputSlot,
}

impl Roles {
    pub fn table<'a>(slot: InputSlot, first: &'a RawTable, second: &'a RawTable) -> &'a RawTable {
        match slot {
            InputSlot::First => first,
            InputSlot::Second => second,
        }
    }
}

/// Decides which input is the LinkedIn export and which the Bullhorn export.
///
/// Fails closed: an unrecognized or ambiguous table, or two tables of the
/// same kind, is an error rather than a guess.
pub fn assign_roles(first: &RawTable, second: &RawTable) -> Result<Roles> {
    let first_format =
        detect_format(&first.headers).ok_or_else(|| unrecognized(InputSlot::First, first))?;
    let second_format =
        detect_format(&second.headers).ok_or_else(|| unrecognized(InputSlot::Second, second))?;

    tracing::debug!(
        "Detected formats: first={}, second={}",
        first_format,
        second_format
    );

    match (first_format, second_format) {
        (ExportFormat::LinkedIn, ExportFormat::Bullhorn) => Ok(Roles {
            linkedin: InputSlot::First,
            bullhorn: InputSlot::Second,
        }),
        (ExportFormat::Bullhorn, ExportFormat::LinkedIn) => Ok(Roles {
            linkedin: InputSlot::Second,
            bullhorn: InputSlot::First,
        }),
        (format, _) => Err(DriftError::UnrecognizedFormat {
            slot: InputSlot::Second,
            found: describe_columns(&second.headers),
            reason: format!(
                "both inputs are {} exports; expected one {} and one {} export",
                format,
                ExportFormat::LinkedIn,
                ExportFormat::Bullhorn
            ),
        }),
    }
}

fn unrecognized(slot: InputSlot, table: &RawTable) -> DriftError {
    let reason = match signatures(&table.headers) {
        (true, true) => format!(
            "it carries both the {} ({}, {}) and the {} ({}, {}) columns",
            ExportFormat::LinkedIn,
            LINKEDIN_FIRST_NAME,
            LINKEDIN_LAST_NAME,
            ExportFormat::Bullhorn,
            BULLHORN_NAME,
            BULLHORN_TITLE
        ),
        _ => format!(
            "expected either '{}' + '{}' ({}) or '{}' + '{}' ({})",
            LINKEDIN_FIRST_NAME,
            LINKEDIN_LAST_NAME,
            ExportFormat::LinkedIn,
            BULLHORN_NAME,
            BULLHORN_TITLE,
            ExportFormat::Bullhorn
        ),
    };
    DriftError::UnrecognizedFormat {
        slot,
        found: describe_columns(&table.headers),
        reason,
    }
}

fn describe_columns(headers: &[String]) -> String {
    if headers.is_empty() {
        "none".to_string()
    } else {
        headers.join(", ")
    }
}
