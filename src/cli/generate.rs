//! Generate command implementation

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::config::Config;
use crate::loader::LoaderGenerator;
use crate::plan::LoaderPlan;

/// Render the loaders listed in a plan file
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// JSON loader plan
    pub plan: PathBuf,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pub pretty: bool,
}

impl GenerateCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let start = Instant::now();

        let content = tokio::fs::read_to_string(&self.plan)
            .await
            .with_context(|| format!("Failed to read loader plan: {}", self.plan.display()))?;
        let plan = LoaderPlan::from_json(&content)
            .with_context(|| format!("Invalid loader plan: {}", self.plan.display()))?;

        let generator = LoaderGenerator::new(config);
        let files = plan.render(&generator);
        info!("Rendered {} loader(s) from {}", files.len(), self.plan.display());

        let json = if self.pretty {
            serde_json::to_string_pretty(&files)?
        } else {
            serde_json::to_string(&files)?
        };
        println!("{}", json);

        eprintln!(
            "{} Generated {} loader(s) in {:.2}ms",
            "✓".green().bold(),
            files.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        for file in &files {
            eprintln!(
                "  {} {} {}",
                "•".dimmed(),
                file.file_name.cyan(),
                format!("{} B", file.len()).dimmed()
            );
        }

        Ok(())
    }
}
