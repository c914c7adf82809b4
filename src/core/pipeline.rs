use crate::adapters::csv_table::parse_table;
use crate::adapters::report::build_archive;
use crate::core::reconcile::reconcile;
use crate::core::{ChangeReport, ConfigProvider, InputPair, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct ReconcilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReconcilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn archive_name(&self) -> String {
        format!("{}.zip", self.config.report_name())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReconcilePipeline<S, C> {
    fn extract(&self) -> Result<InputPair> {
        let delimiter = self.config.delimiter();

        tracing::debug!("Reading first input: {}", self.config.first_input());
        let first = parse_table(&self.storage.read_file(self.config.first_input())?, delimiter)?;

        tracing::debug!("Reading second input: {}", self.config.second_input());
        let second = parse_table(&self.storage.read_file(self.config.second_input())?, delimiter)?;

        Ok(InputPair { first, second })
    }

    fn transform(&self, input: InputPair) -> Result<ChangeReport> {
        reconcile(&input.first, &input.second, self.config.thresholds())
    }

    fn load(&self, report: ChangeReport) -> Result<String> {
        let archive_name = self.archive_name();
        let data = build_archive(&report, chrono::Utc::now())?;

        tracing::debug!("Writing {} ({} bytes) to storage", archive_name, data.len());
        self.storage.write_file(&archive_name, &data)?;

        Ok(Path::new(self.config.output_path())
            .join(&archive_name)
            .to_string_lossy()
            .into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Thresholds;
    use crate::utils::error::DriftError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(self, path: &str, data: &str) -> Self {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.as_bytes().to_vec());
            self
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for &MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                DriftError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        thresholds: Thresholds,
    }

    impl ConfigProvider for MockConfig {
        fn first_input(&self) -> &str {
            "bullhorn.csv"
        }

        fn second_input(&self) -> &str {
            "linkedin.csv"
        }

        fn thresholds(&self) -> Thresholds {
            self.thresholds
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn report_name(&self) -> &str {
            "role_change_report"
        }

        fn delimiter(&self) -> Option<u8> {
            None
        }
    }

    fn storage() -> MockStorage {
        MockStorage::default()
            .with_file(
                "bullhorn.csv",
                "Naam;Huidige functietitel;Bedrijf\nJan de Vries;Data Engineer;Acme\nPeter Bakker;Recruiter;Hooli\n",
            )
            .with_file(
                "linkedin.csv",
                "First Name,Last Name,Position,Company\nJan,de Vries,Head of Data,Acme\nPeter,Bakker,Recruiter,Hooli\n",
            )
    }

    #[test]
    fn test_extract_reads_both_inputs() {
        let storage = storage();
        let pipeline = ReconcilePipeline::new(&storage, MockConfig { thresholds: Thresholds::default() });

        let input = pipeline.extract().unwrap();
        assert!(input.first.has_column("Naam"));
        assert!(input.second.has_column("First Name"));
        assert_eq!(input.first.len(), 2);
    }

    #[test]
    fn test_extract_missing_file() {
        let storage = MockStorage::default().with_file("bullhorn.csv", "Naam\n");
        let pipeline = ReconcilePipeline::new(&storage, MockConfig { thresholds: Thresholds::default() });
        assert!(matches!(pipeline.extract(), Err(DriftError::Io(_))));
    }

    #[test]
    fn test_transform_then_load_writes_archive() {
        let storage = storage();
        let pipeline = ReconcilePipeline::new(&storage, MockConfig { thresholds: Thresholds::default() });

        let input = pipeline.extract().unwrap();
        let report = pipeline.transform(input).unwrap();
        assert_eq!(report.new_role_same_company.len(), 1);
        assert_eq!(report.stats.unchanged_pairs, 1);

        let output_path = pipeline.load(report).unwrap();
        assert_eq!(
            Path::new(&output_path),
            Path::new("test_output").join("role_change_report.zip")
        );

        let zip_data = storage.get_file("role_change_report.zip").unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 4);
    }

    #[test]
    fn test_transform_rejects_invalid_thresholds() {
        let storage = storage();
        let pipeline = ReconcilePipeline::new(
            &storage,
            MockConfig {
                thresholds: Thresholds { company: 60, title: 101 },
            },
        );
        let input = pipeline.extract().unwrap();
        assert!(pipeline.transform(input).is_err());
    }
}
