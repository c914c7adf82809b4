use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "contact-drift")]
#[command(about = "Detect role and company changes between a LinkedIn and a Bullhorn contact export")]
pub struct CliConfig {
    /// First export (LinkedIn or Bullhorn CSV; order does not matter)
    #[arg(long)]
    pub first: Option<String>,

    /// Second export
    #[arg(long)]
    pub second: Option<String>,

    /// Company similarity (0-100) at or above which two companies count as the same [default: 60]
    #[arg(long)]
    pub company_threshold: Option<u32>,

    /// Title similarity (0-100) at or above which two titles count as the same [default: 60]
    #[arg(long)]
    pub title_threshold: Option<u32>,

    /// Directory the report archive is written to [default: ./output]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Report archive name without extension [default: role_change_report]
    #[arg(long)]
    pub report_name: Option<String>,

    /// Field delimiter of the inputs (",", ";" or "tab"); sniffed when omitted
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入 TOML (若有) 後套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(first) = &self.first {
            file.inputs.first = Some(first.clone());
        }
        if let Some(second) = &self.second {
            file.inputs.second = Some(second.clone());
        }
        if let Some(delimiter) = &self.delimiter {
            file.inputs.delimiter = Some(delimiter.clone());
        }
        if let Some(company) = self.company_threshold {
            file.thresholds.company = Some(company);
        }
        if let Some(title) = self.title_threshold {
            file.thresholds.title = Some(title);
        }
        if let Some(path) = &self.output_path {
            file.output.path = Some(path.clone());
        }
        if let Some(name) = &self.report_name {
            file.output.report_name = Some(name.clone());
        }

        file.into_run_config()
    }
}
