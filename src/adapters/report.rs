use crate::domain::model::{BucketTable, ChangeReport, ReconStats, Thresholds};
use crate::utils::error::{DriftError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Serialize)]
pub struct BucketSummary {
    pub name: &'static str,
    pub file: String,
    pub rows: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub generated_at: DateTime<Utc>,
    pub thresholds: Thresholds,
    pub stats: &'a ReconStats,
    pub buckets: Vec<BucketSummary>,
}

pub fn bucket_file_name(table: &BucketTable) -> String {
    format!("{}.csv", table.bucket.file_stem())
}

/// 將單一類別寫成 CSV (含標題列)
pub fn bucket_to_csv(table: &BucketTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| DriftError::Io(e.into_error()))
}

pub fn summarize(report: &ChangeReport, generated_at: DateTime<Utc>) -> ReportSummary<'_> {
    ReportSummary {
        generated_at,
        thresholds: report.thresholds,
        stats: &report.stats,
        buckets: report
            .tables()
            .iter()
            .map(|table| BucketSummary {
                name: table.bucket.label(),
                file: bucket_file_name(table),
                rows: table.len(),
            })
            .collect(),
    }
}

/// Packs one CSV per bucket plus `summary.json` into an in-memory ZIP archive.
pub fn build_archive(report: &ChangeReport, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for table in report.tables() {
        let name = bucket_file_name(table);
        tracing::debug!("Adding {} ({} rows)", name, table.len());
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&bucket_to_csv(table)?)?;
    }

    zip.start_file(SUMMARY_FILE, options)?;
    let summary = serde_json::to_string_pretty(&summarize(report, generated_at))?;
    zip.write_all(summary.as_bytes())?;

    // 完成並取回底層 Vec<u8>
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
