//! Step-level test reporting.
//!
//! A purely observational sink: suites record named steps and a final
//! status, and the reporter writes one JSON result file per test into a
//! results directory for the external HTML generator to pick up. Nothing
//! here influences control flow.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::E2eResult;

/// Test result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
    /// Test was skipped
    Skipped,
}

impl TestStatus {
    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// One named step inside a test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step name
    pub name: String,
    /// When the step started
    pub started_at: DateTime<Utc>,
    /// Elapsed time
    pub elapsed_ms: u64,
}

/// Result record for one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    /// Test name (suite path plus case id for data-driven cases)
    pub name: String,
    /// Final status
    pub status: TestStatus,
    /// Recorded steps in execution order
    pub steps: Vec<StepRecord>,
    /// Error message if failed
    pub error: Option<String>,
    /// When the test finished
    pub finished_at: DateTime<Utc>,
}

/// Collects step annotations for one test and writes the result file.
#[derive(Debug)]
pub struct TestReporter {
    results_dir: PathBuf,
    name: String,
    steps: Vec<StepRecord>,
    current: Option<(String, SystemTime)>,
}

impl TestReporter {
    /// Start recording a test
    #[must_use]
    pub fn new(results_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(test = %name, "recording");
        Self {
            results_dir: results_dir.into(),
            name,
            steps: Vec::new(),
            current: None,
        }
    }

    /// Begin a named step, closing the previous one
    pub fn step(&mut self, name: impl Into<String>) {
        self.close_step();
        let name = name.into();
        info!(step = %name, test = %self.name);
        self.current = Some((name, SystemTime::now()));
    }

    fn close_step(&mut self) {
        if let Some((name, started)) = self.current.take() {
            let elapsed = started.elapsed().unwrap_or(Duration::ZERO);
            self.steps.push(StepRecord {
                name,
                started_at: DateTime::from(started),
                elapsed_ms: elapsed.as_millis() as u64,
            });
        }
    }

    /// Close the test with a status and write its result file
    pub fn finish(mut self, status: TestStatus, error: Option<String>) -> E2eResult<TestRecord> {
        self.close_step();
        let record = TestRecord {
            name: self.name,
            status,
            steps: self.steps,
            error,
            finished_at: Utc::now(),
        };
        std::fs::create_dir_all(&self.results_dir)?;
        let file_name = format!("{}-result.json", sanitize(&record.name));
        let path = self.results_dir.join(file_name);
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "wrote result");
        Ok(record)
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Delete result files older than `keep_days`, returning how many were
/// removed. Missing directories count as already clean.
pub fn clean_old_results(dir: &Path, keep_days: u64) -> E2eResult<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let cutoff = SystemTime::now() - Duration::from_secs(keep_days * 24 * 60 * 60);
    let mut removed = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if modified <= cutoff {
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    if removed > 0 {
        info!(removed, dir = %dir.display(), "cleaned old result files");
    }
    Ok(removed)
}
