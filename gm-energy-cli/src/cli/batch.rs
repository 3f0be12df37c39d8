use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use crate::{batch::Batch, cli::OutputFormat, prelude::*, report::render_all};

#[derive(Parser)]
pub struct BatchArgs {
    /// TOML file with `[[solar]]`, `[[degradation]]`, and `[[bess]]` entries.
    pub path: PathBuf,
}

impl BatchArgs {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn run(&self, format: OutputFormat) -> Result {
        let batch = Batch::read_from(&self.path)?;
        ensure!(!batch.is_empty(), "the batch file lists no calculations");
        info!(n_entries = batch.len(), "loaded");

        let (reports, rejections): (Vec<_>, Vec<_>) = batch.run().into_iter().partition_result();
        for report in &reports {
            debug!(calculator = report.calculator(), "calculated");
        }
        for rejection in &rejections {
            error!("{rejection}");
        }
        println!("{}", render_all(&reports, format)?);

        ensure!(
            rejections.is_empty(),
            "{} of {} calculations have been rejected",
            rejections.len(),
            reports.len() + rejections.len(),
        );
        Ok(())
    }
}
