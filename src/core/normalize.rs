use crate::core::format::{
    BULLHORN_COMPANY, BULLHORN_NAME, BULLHORN_TITLE, LINKEDIN_COMPANY, LINKEDIN_FIRST_NAME,
    LINKEDIN_LAST_NAME, LINKEDIN_TITLE,
};
use crate::domain::model::{ExportFormat, InputSlot, PersonRecord, RawTable};
use crate::utils::error::{DriftError, Result};

enum NameColumns {
    Split { given: usize, family: usize },
    Combined(usize),
}

/// 欄位位置，在偵測格式後解析一次
struct ColumnLayout {
    name: NameColumns,
    title: usize,
    company: usize,
}

impl ColumnLayout {
    fn resolve(table: &RawTable, format: ExportFormat, slot: InputSlot) -> Result<Self> {
        let require = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| DriftError::MissingColumn {
                    slot,
                    format,
                    column: column.to_string(),
                })
        };

        match format {
            ExportFormat::LinkedIn => Ok(Self {
                name: NameColumns::Split {
                    given: require(LINKEDIN_FIRST_NAME)?,
                    family: require(LINKEDIN_LAST_NAME)?,
                },
                title: require(LINKEDIN_TITLE)?,
                company: require(LINKEDIN_COMPANY)?,
            }),
            ExportFormat::Bullhorn => Ok(Self {
                name: NameColumns::Combined(require(BULLHORN_NAME)?),
                title: require(BULLHORN_TITLE)?,
                company: require(BULLHORN_COMPANY)?,
            }),
        }
    }

    fn person_name(&self, table: &RawTable, row: &[String]) -> String {
        match self.name {
            NameColumns::Split { given, family } => format!(
                "{} {}",
                table.cell(row, given).trim(),
                table.cell(row, family).trim()
            )
            .trim()
            .to_string(),
            NameColumns::Combined(column) => table.cell(row, column).trim().to_string(),
        }
    }
}

/// Projects a detected table onto [`PersonRecord`]s.
///
/// Titles and companies are copied as-is; blank cells become empty strings.
/// Rows whose person name is blank are skipped, they could never link.
pub fn normalize(table: &RawTable, format: ExportFormat, slot: InputSlot) -> Result<Vec<PersonRecord>> {
    let layout = ColumnLayout::resolve(table, format, slot)?;

    let records: Vec<PersonRecord> = table
        .rows
        .iter()
        .filter_map(|row| {
            let name = layout.person_name(table, row);
            if name.is_empty() {
                tracing::trace!("Skipping {} row without a name", format);
                return None;
            }
            Some(PersonRecord {
                name,
                title: table.cell(row, layout.title).to_string(),
                company: table.cell(row, layout.company).to_string(),
                origin: format,
            })
        })
        .collect();

    tracing::debug!(
        "Normalized {} of {} {} rows from the {}",
        records.len(),
        table.len(),
        format,
        slot
    );

    Ok(records)
}
