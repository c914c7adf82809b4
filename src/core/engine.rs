use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReconEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReconEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting reconciliation...");

        // Extract
        let input = self.pipeline.extract()?;
        tracing::info!(
            "📥 Read {} rows (first input) and {} rows (second input)",
            input.first.len(),
            input.second.len()
        );

        // Transform
        let report = self.pipeline.transform(input)?;
        tracing::info!(
            "🔗 Linked {} people: {} new role, {} new company, {} both changed, {} unchanged",
            report.stats.linked_pairs,
            report.new_role_same_company.len(),
            report.same_role_new_company.len(),
            report.different_role_and_company.len(),
            report.stats.unchanged_pairs
        );

        // Load
        let output_path = self.pipeline.load(report)?;
        tracing::info!("📁 Report saved to: {} ({:?})", output_path, started.elapsed());

        Ok(output_path)
    }
}
