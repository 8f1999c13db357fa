use sise_core::{DateInput, Interval, SiseError};

use crate::core::Sise;

/// One unit of batch work: a ticker plus its desired coverage window.
#[derive(Debug, Clone)]
pub struct SyncJob {
    /// Ticker to reconcile.
    pub ticker: String,
    /// Desired coverage start.
    pub start: DateInput,
    /// Desired coverage end.
    pub end: DateInput,
}

impl SyncJob {
    /// Build a job from anything convertible into the field types.
    pub fn new(
        ticker: impl Into<String>,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Snapshot handed to the progress callback before each job runs.
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress<'a> {
    /// 1-based position of the current job.
    pub index: usize,
    /// Total number of jobs in the batch.
    pub total: usize,
    /// Ticker about to be reconciled.
    pub ticker: &'a str,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Tickers whose series were reconciled and persisted.
    pub synced: Vec<String>,
    /// Tickers that failed, with the error that stopped each one.
    pub failed: Vec<(String, SiseError)>,
}

impl BatchReport {
    /// Whether every job in the batch succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Sise {
    /// Reconcile a batch of tickers sequentially.
    ///
    /// Jobs run one at a time, so each (ticker, interval) file has exactly
    /// one owner for its load/fetch/save triple. A failing job is logged with
    /// its ticker and recorded in the report; the batch always continues to
    /// the next job. `on_progress` fires before each job.
    pub async fn sync_many<F>(
        &self,
        interval: Interval,
        jobs: Vec<SyncJob>,
        mut on_progress: F,
    ) -> BatchReport
    where
        F: FnMut(BatchProgress<'_>),
    {
        let total = jobs.len();
        let mut report = BatchReport::default();

        for (i, job) in jobs.into_iter().enumerate() {
            on_progress(BatchProgress {
                index: i + 1,
                total,
                ticker: &job.ticker,
            });

            match self.sync(&job.ticker, interval, job.start, job.end).await {
                Ok(_) => report.synced.push(job.ticker),
                Err(e) => {
                    tracing::warn!(
                        ticker = %job.ticker,
                        interval = %interval,
                        error = %e,
                        "sync failed; continuing batch"
                    );
                    report.failed.push((job.ticker, e));
                }
            }
        }
        report
    }
}
