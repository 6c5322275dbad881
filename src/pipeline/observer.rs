//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. [`NoopObserver`] is the zero-cost default;
//! [`StageTimingObserver`] records a report per stage.

use std::time::{Duration, Instant};

pub const STAGE_SENTENCES: &str = "sentences";
pub const STAGE_CANDIDATES: &str = "candidates";
pub const STAGE_WORD_SCORES: &str = "word_scores";
pub const STAGE_CANDIDATE_SCORES: &str = "candidate_scores";
pub const STAGE_RANK: &str = "rank";

/// All stages in execution order
pub const STAGES: [&str; 5] = [
    STAGE_SENTENCES,
    STAGE_CANDIDATES,
    STAGE_WORD_SCORES,
    STAGE_CANDIDATE_SCORES,
    STAGE_RANK,
];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Summary of a finished stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    /// Time spent in the stage
    pub elapsed: Duration,
    /// Number of items the stage produced (sentences, phrases, words, ...)
    pub items: usize,
}

impl StageReport {
    pub fn new(elapsed: Duration, items: usize) -> Self {
        Self { elapsed, items }
    }
}

/// Receives stage boundary notifications from the pipeline
pub trait PipelineObserver {
    /// Called before a stage runs.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// Called after a stage finishes.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every stage in order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order stages finished
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a named stage
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Total time across all recorded stages
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_start(STAGE_SENTENCES);
        observer.on_stage_end(STAGE_SENTENCES, &StageReport::new(Duration::from_millis(2), 6));
        observer.on_stage_end(STAGE_CANDIDATES, &StageReport::new(Duration::from_millis(3), 11));

        let names: Vec<_> = observer.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SENTENCES, STAGE_CANDIDATES]);
        assert_eq!(observer.report(STAGE_CANDIDATES).unwrap().items, 11);
        assert_eq!(observer.total_elapsed(), Duration::from_millis(5));
        assert!(observer.report(STAGE_RANK).is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}
