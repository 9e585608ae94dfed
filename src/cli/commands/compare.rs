//! `wordhunt compare` - count a word sequentially and in parallel
//!
//! Positional arguments that are missing are asked for interactively when
//! stdin is a terminal; otherwise the command fails before doing any work.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::HuntConfig;
use crate::count::{Hunt, ReportFormat};
use crate::parallel::PartitionStrategy;

#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Directory whose files are searched (not recursive)
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Word to count
    #[arg(value_name = "WORD")]
    pub word: Option<String>,

    /// Worker threads for the parallel run (must be at least 1)
    #[arg(short, long, value_name = "N")]
    pub workers: Option<NonZeroUsize>,

    /// How files are split between workers
    #[arg(long, value_enum)]
    pub partition: Option<PartitionStrategy>,

    /// Longest token compared as a whole, in bytes (0 = unlimited)
    #[arg(long, value_name = "BYTES")]
    pub max_token_bytes: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl CompareArgs {
    /// Layer the command-line flags over the loaded configuration
    fn apply_to(&self, config: &mut HuntConfig) {
        if let Some(workers) = self.workers {
            config.workers = Some(workers.get());
        }
        if let Some(partition) = self.partition {
            config.partition = partition;
        }
        if let Some(max_token_bytes) = self.max_token_bytes {
            config.max_token_bytes = max_token_bytes;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

pub fn execute(args: CompareArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let mut config = HuntConfig::load(config_path)?;
    args.apply_to(&mut config);

    let interactive = atty::is(atty::Stream::Stdin);
    let prompted = args.directory.is_none() || args.word.is_none();

    let directory = match args.directory {
        Some(directory) => directory,
        None if interactive => PathBuf::from(prompt_text("Directory to search")?),
        None => anyhow::bail!("No directory given and stdin is not a terminal"),
    };

    let word = match args.word {
        Some(word) => word,
        None if interactive => prompt_text("Word to count")?,
        None => anyhow::bail!("No word given and stdin is not a terminal"),
    };

    if prompted && config.workers.is_none() {
        let suggested = config.worker_count()?;
        config.workers = Some(prompt_workers(suggested)?.get());
    }

    let hunt = Hunt::new(&word, &config)?;
    output.step(&format!(
        "Counting '{}' in {} ({} workers, {} partition)",
        hunt.word(),
        directory.display(),
        hunt.workers(),
        config.partition
    ));

    let comparison = hunt
        .compare(&directory)
        .with_context(|| format!("Word count in {} failed", directory.display()))?;

    match config.format {
        ReportFormat::Text => output.report(&comparison.render_text()),
        ReportFormat::Json => output.report(&comparison.to_json()?),
    }

    if comparison.counts_agree() {
        output.verbose("Sequential and parallel totals agree");
    } else {
        output.warning(&format!(
            "Sequential total {} differs from parallel total {}",
            comparison.sequential.total, comparison.parallel.total
        ));
    }

    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_workers(suggested: NonZeroUsize) -> Result<NonZeroUsize> {
    let workers = Input::<NonZeroUsize>::with_theme(&ColorfulTheme::default())
        .with_prompt("Number of worker threads")
        .default(suggested)
        .interact_text()?;
    Ok(workers)
}
