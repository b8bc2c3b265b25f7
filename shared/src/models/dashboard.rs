//! Load bookkeeping for the analytics dashboard: period selection, bounded
//! retries and superseded-response detection.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::time::Duration;

use crate::dto::analytics::AnalyticsPeriod;
use crate::error::SharedError;

pub const MAX_RETRIES: u32 = 3;
pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(1_000);

/// Linear backoff: attempt `n` (1-based) waits `n * base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: MAX_RETRIES,
            base_delay: RETRY_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    Initial,
    PeriodChange,
    Refresh,
    Retry,
    /// Fired by a scheduled retry timer rather than the user.
    RetryTimer,
}

impl LoadTrigger {
    pub fn is_user_initiated(&self) -> bool {
        !matches!(self, LoadTrigger::RetryTimer)
    }
}

/// Identifies one fetch; stale tickets are ignored when they resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub period: AnalyticsPeriod,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    RetryAfter(Duration),
    ShowError,
    /// The ticket was superseded by a newer user action.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardController {
    policy: RetryPolicy,
    period: AnalyticsPeriod,
    retry_count: u32,
    generation: u64,
    phase: LoadPhase,
}

impl DashboardController {
    pub fn new(policy: RetryPolicy, period: AnalyticsPeriod) -> Self {
        DashboardController {
            policy,
            period,
            ..Default::default()
        }
    }

    pub fn period(&self) -> AnalyticsPeriod {
        self.period
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Starts a fetch for the current period. User-initiated loads reset the
    /// retry budget and supersede any fetch still in flight.
    pub fn begin_load(&mut self, trigger: LoadTrigger) -> LoadTicket {
        if trigger.is_user_initiated() {
            self.retry_count = 0;
            self.generation += 1;
        }
        self.phase = LoadPhase::Loading;
        LoadTicket {
            period: self.period,
            generation: self.generation,
        }
    }

    /// Switches period and starts a load, or returns `None` if `period` is
    /// already selected.
    pub fn select_period(&mut self, period: AnalyticsPeriod) -> Option<LoadTicket> {
        if period == self.period {
            return None;
        }
        self.period = period;
        Some(self.begin_load(LoadTrigger::PeriodChange))
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Returns false when the ticket is stale and its payload must be dropped.
    pub fn on_success(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.retry_count = 0;
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Errors that retrying cannot fix skip the remaining budget.
    pub fn on_failure(&mut self, ticket: LoadTicket, error: &SharedError) -> FailureOutcome {
        if !self.is_current(ticket) {
            return FailureOutcome::Stale;
        }
        if error.is_transient() && self.retry_count < self.policy.max_retries {
            self.retry_count += 1;
            FailureOutcome::RetryAfter(self.policy.delay_for(self.retry_count))
        } else {
            self.phase = LoadPhase::Failed;
            FailureOutcome::ShowError
        }
    }
}

/// `"{label}: HH:MM"` for a unix-seconds timestamp in the viewer's zone.
pub fn last_updated_text<Tz>(label: &str, generated_at: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let at = DateTime::from_timestamp(generated_at, 0)?.with_timezone(tz);
    Some(format!("{}: {}", label, at.format("%H:%M")))
}
