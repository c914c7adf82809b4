use crate::core::similarity::TokenSet;
use crate::domain::model::{ClassifiedRow, LinkedPair, Thresholds};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

/// Lower-cases and trims a title or company. Idempotent.
pub fn canonical(value: &str) -> String {
    value.trim().to_lowercase()
}

impl Validate for Thresholds {
    fn validate(&self) -> Result<()> {
        validate_range("thresholds.company", self.company, 0, 100)?;
        validate_range("thresholds.title", self.title, 0, 100)?;
        Ok(())
    }
}

/// Token-set ratio of one attribute. Blank on both sides means nothing changed,
/// so that case scores 100 instead of the scorer's 0.
pub fn field_similarity(a: &str, b: &str) -> u8 {
    let (a, b) = (TokenSet::new(a), TokenSet::new(b));
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    a.ratio(&b)
}

/// Scores the title and company of a linked pair against the thresholds.
pub fn compare(pair: LinkedPair, thresholds: &Thresholds) -> ClassifiedRow {
    let company_similarity = field_similarity(&pair.company_a, &pair.company_b);
    let title_similarity = field_similarity(&pair.title_a, &pair.title_b);

    ClassifiedRow {
        company_same: u32::from(company_similarity) >= thresholds.company,
        title_same: u32::from(title_similarity) >= thresholds.title,
        company_similarity,
        title_similarity,
        pair,
    }
}
