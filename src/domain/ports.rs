use crate::domain::model::{ChangeReport, InputPair, Thresholds};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn first_input(&self) -> &str;
    fn second_input(&self) -> &str;
    fn thresholds(&self) -> Thresholds;
    fn output_path(&self) -> &str;
    fn report_name(&self) -> &str;
    /// Field delimiter override; `None` means sniff it from the header line.
    fn delimiter(&self) -> Option<u8>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<InputPair>;
    fn transform(&self, input: InputPair) -> Result<ChangeReport>;
    fn load(&self, report: ChangeReport) -> Result<String>;
}
