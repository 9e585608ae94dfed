use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::parallel::{PartitionStrategy, RunOutcome};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON format for machine processing
    Json,
}

/// Both runs over one directory, side by side
///
/// `Display` renders the text report; the derived `Serialize` backs the JSON one.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Normalized word that was counted
    pub word: String,
    #[serde(serialize_with = "serialize_lossy_path")]
    pub directory: PathBuf,
    pub workers: usize,
    pub partition: PartitionStrategy,
    pub sequential: RunOutcome,
    pub parallel: RunOutcome,
}

/// Paths that are not UTF-8 are reported with replacement characters
fn serialize_lossy_path<S: serde::Serializer>(path: &Path, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_string_lossy())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    counts_agree: bool,
    speedup_percent: f64,
}

impl Comparison {
    /// `(t_seq - t_par) / t_seq * 100`; positive means the parallel run was faster
    ///
    /// Zero when the sequential run took no measurable time.
    pub fn speedup_percent(&self) -> f64 {
        let sequential = self.sequential.elapsed.as_secs_f64();
        if sequential == 0.0 {
            return 0.0;
        }
        (sequential - self.parallel.elapsed.as_secs_f64()) / sequential * 100.0
    }

    pub fn counts_agree(&self) -> bool {
        self.sequential.total == self.parallel.total
    }

    /// Plain-text report: both counts, both times, then the verdict
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    fn fmt_run(&self, f: &mut fmt::Formatter<'_>, run: &RunOutcome) -> fmt::Result {
        writeln!(f, "Total occurrences of '{}': {}", self.word, run.total)?;
        writeln!(f, "Elapsed time: {:.4} seconds", run.elapsed.as_secs_f64())?;
        if run.skipped > 0 {
            writeln!(f, "Skipped files: {} of {}", run.skipped, run.files)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            comparison: self,
            summary: Summary {
                counts_agree: self.counts_agree(),
                speedup_percent: self.speedup_percent(),
            },
        })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequential run:")?;
        self.fmt_run(f, &self.sequential)?;
        writeln!(f)?;

        writeln!(
            f,
            "Parallel run ({} workers, {} partition):",
            self.workers, self.partition
        )?;
        self.fmt_run(f, &self.parallel)?;
        writeln!(f)?;

        let percent = self.speedup_percent();
        if percent > 0.0 {
            writeln!(f, "The parallel run was {percent:.2}% faster than the sequential run.")
        } else {
            writeln!(
                f,
                "The parallel run was {:.2}% slower than the sequential run.",
                percent.abs()
            )
        }
    }
}
