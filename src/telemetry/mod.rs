//! Telemetry for examscore
//!
//! Collects pipeline events in memory for the lifetime of the process and
//! renders a session summary. Counters cover the whole session; only the
//! most recent events are kept. Nothing is written to disk.

use crate::cli::Verbosity;
use colored::Colorize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Events retained for the verbose summary
pub const MAX_RECENT_EVENTS: usize = 20;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    // Model events
    ModelLoaded {
        path: String,
        kind: String,
        timestamp: Instant,
    },
    ModelLoadFailed {
        path: String,
        reason: String,
        timestamp: Instant,
    },

    // Submission events
    SubmissionRejected {
        invalid_fields: usize,
        timestamp: Instant,
    },
    PredictionMade {
        score: f64,
        tips: usize,
        timestamp: Instant,
    },
    PredictionFailed {
        reason: String,
        timestamp: Instant,
    },
}

impl TelemetryEvent {
    /// One-line description for the summary
    pub fn describe(&self) -> String {
        match self {
            TelemetryEvent::ModelLoaded { path, kind, .. } => {
                format!("model loaded: {} ({})", path, kind)
            }
            TelemetryEvent::ModelLoadFailed { reason, .. } => {
                format!("model load failed: {}", reason)
            }
            TelemetryEvent::SubmissionRejected { invalid_fields, .. } => {
                format!("submission rejected: {} invalid field(s)", invalid_fields)
            }
            TelemetryEvent::PredictionMade { score, tips, .. } => {
                format!("prediction: {:.1} with {} tip(s)", score, tips)
            }
            TelemetryEvent::PredictionFailed { reason, .. } => {
                format!("prediction failed: {}", reason)
            }
        }
    }
}

/// Telemetry statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub model_loads: usize,
    pub model_load_failures: usize,
    pub submissions: usize,
    pub rejected_submissions: usize,
    pub predictions: usize,
    pub prediction_failures: usize,
    pub tips_given: usize,
    pub score_total: f64,
}

/// Telemetry collector
#[derive(Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<VecDeque<TelemetryEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_RECENT_EVENTS))),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: TelemetryEvent) {
        {
            let mut stats = lock(&self.stats);
            match &event {
                TelemetryEvent::ModelLoaded { .. } => {
                    stats.model_loads += 1;
                }
                TelemetryEvent::ModelLoadFailed { .. } => {
                    stats.model_load_failures += 1;
                }
                TelemetryEvent::SubmissionRejected { .. } => {
                    stats.submissions += 1;
                    stats.rejected_submissions += 1;
                }
                TelemetryEvent::PredictionMade { score, tips, .. } => {
                    stats.submissions += 1;
                    stats.predictions += 1;
                    stats.tips_given += tips;
                    stats.score_total += score;
                }
                TelemetryEvent::PredictionFailed { .. } => {
                    stats.submissions += 1;
                    stats.prediction_failures += 1;
                }
            }
        }

        let mut events = lock(&self.events);
        if events.len() == MAX_RECENT_EVENTS {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        lock(&self.stats).clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get recent events (last n), oldest first
    pub fn recent_events(&self, n: usize) -> Vec<TelemetryEvent> {
        let events = lock(&self.events);
        let start = events.len().saturating_sub(n);
        events.iter().skip(start).cloned().collect()
    }

    /// Mean of all predicted scores this session
    pub fn average_score(&self) -> Option<f64> {
        let stats = lock(&self.stats);
        if stats.predictions == 0 {
            None
        } else {
            Some(stats.score_total / stats.predictions as f64)
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple telemetry display
pub struct TelemetryDisplay {
    collector: TelemetryCollector,
    verbosity: Verbosity,
}

impl TelemetryDisplay {
    /// Create a new display
    pub fn new(collector: TelemetryCollector, verbosity: Verbosity) -> Self {
        Self {
            collector,
            verbosity,
        }
    }

    /// Display summary statistics
    pub fn display_summary(&self) {
        if !self.verbosity.show_progress() {
            return;
        }

        let stats = self.collector.get_stats();
        let elapsed = self.collector.elapsed();

        println!("\n{}", "Session Summary".bold());
        println!("─────────────────────────────────────");
        println!("Duration:          {:.1?}", elapsed);
        println!("Submissions:       {}", stats.submissions);
        println!("Predictions:       {}", stats.predictions);
        println!("Rejected inputs:   {}", stats.rejected_submissions);
        println!("Failed:            {}", stats.prediction_failures);
        if let Some(avg) = self.collector.average_score() {
            println!("Average score:     {:.1}", avg);
        }

        if self.should_show_details() {
            println!("\n{}", "Recent events".bold());
            for event in self.collector.recent_events(MAX_RECENT_EVENTS) {
                println!("  {}", event.describe().dimmed());
            }
        }
        println!();
    }

    /// Check if should show detailed output
    pub fn should_show_details(&self) -> bool {
        self.verbosity.show_events()
    }
}
