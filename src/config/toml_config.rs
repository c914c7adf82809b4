use crate::config::{parse_delimiter, RunConfig, DEFAULT_OUTPUT_PATH, DEFAULT_REPORT_NAME};
use crate::domain::model::Thresholds;
use crate::utils::error::{DriftError, Result};
use crate::utils::validation::validate_required_field;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputsConfig {
    pub first: Option<String>,
    pub second: Option<String>,
    pub delimiter: Option<String>, // "," ";" "tab"
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    pub company: Option<u32>,
    pub title: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub report_name: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DriftError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DriftError::ConfigValidation {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 填入預設值並轉成執行用配置
    pub fn into_run_config(self) -> Result<RunConfig> {
        let defaults = Thresholds::default();
        let delimiter = match &self.inputs.delimiter {
            Some(value) => Some(parse_delimiter("inputs.delimiter", value)?),
            None => None,
        };

        Ok(RunConfig {
            first_input: validate_required_field("inputs.first", &self.inputs.first)?.clone(),
            second_input: validate_required_field("inputs.second", &self.inputs.second)?.clone(),
            thresholds: Thresholds {
                company: self.thresholds.company.unwrap_or(defaults.company),
                title: self.thresholds.title.unwrap_or(defaults.title),
            },
            output_path: self
                .output
                .path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            report_name: self
                .output
                .report_name
                .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string()),
            delimiter,
        })
    }
}
