#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::domain::model::Thresholds;
use crate::utils::error::{DriftError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_REPORT_NAME: &str = "role_change_report";
pub const INPUT_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub first_input: String,
    pub second_input: String,
    pub thresholds: Thresholds,
    pub output_path: String,
    pub report_name: String,
    pub delimiter: Option<u8>,
}

/// Accepts a single ASCII character, or `tab`/`\t` for a tab.
pub fn parse_delimiter(field_name: &str, value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        v if v.len() == 1 && v.is_ascii() => Ok(v.as_bytes()[0]),
        v => Err(DriftError::InvalidConfigValue {
            field: field_name.to_string(),
            value: v.to_string(),
            reason: "Delimiter must be a single ASCII character or 'tab'".to_string(),
        }),
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("inputs.first", &self.first_input)?;
        validate_file_extension("inputs.first", &self.first_input, &INPUT_EXTENSIONS)?;
        validate_path("inputs.second", &self.second_input)?;
        validate_file_extension("inputs.second", &self.second_input, &INPUT_EXTENSIONS)?;

        self.thresholds.validate()?;

        validate_path("output.path", &self.output_path)?;
        validate_non_empty_string("output.report_name", &self.report_name)?;
        if self.report_name.contains(['/', '\\']) {
            return Err(DriftError::InvalidConfigValue {
                field: "output.report_name".to_string(),
                value: self.report_name.clone(),
                reason: "Report name must be a file name, not a path".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn first_input(&self) -> &str {
        &self.first_input
    }

    fn second_input(&self) -> &str {
        &self.second_input
    }

    fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_name(&self) -> &str {
        &self.report_name
    }

    fn delimiter(&self) -> Option<u8> {
        self.delimiter
    }
}
