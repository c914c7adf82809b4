use crate::core::classify::classify;
use crate::core::compare::compare;
use crate::core::format::{assign_roles, Roles};
use crate::core::linker::link_names;
use crate::core::normalize::normalize;
use crate::domain::model::{ChangeReport, ExportFormat, RawTable, ReconStats, Thresholds};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs detection, normalization, linking, comparison and classification over
/// two parsed exports. Nothing is produced unless every stage succeeds.
pub fn reconcile(first: &RawTable, second: &RawTable, thresholds: Thresholds) -> Result<ChangeReport> {
    thresholds.validate()?;

    let roles = assign_roles(first, second)?;
    let linkedin_table = Roles::table(roles.linkedin, first, second);
    let bullhorn_table = Roles::table(roles.bullhorn, first, second);

    let linkedin = normalize(linkedin_table, ExportFormat::LinkedIn, roles.linkedin)?;
    let bullhorn = normalize(bullhorn_table, ExportFormat::Bullhorn, roles.bullhorn)?;
    let skipped_blank_names =
        (linkedin_table.len() - linkedin.len()) + (bullhorn_table.len() - bullhorn.len());

    let pairs = link_names(&linkedin, &bullhorn);
    let linked_pairs = pairs.len();

    let classification = classify(pairs.into_iter().map(|pair| compare(pair, &thresholds)));

    Ok(ChangeReport {
        new_role_same_company: classification.new_role_same_company,
        same_role_new_company: classification.same_role_new_company,
        different_role_and_company: classification.different_role_and_company,
        thresholds,
        stats: ReconStats {
            linkedin_records: linkedin.len(),
            bullhorn_records: bullhorn.len(),
            skipped_blank_names,
            linked_pairs,
            unchanged_pairs: classification.unchanged,
        },
    })
}
