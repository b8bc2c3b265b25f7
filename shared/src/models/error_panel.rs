use crate::dto::analytics::{ErrorStats, HealthStatus, RecentError};
use crate::models::stat_card::format_percent;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthBadge {
    pub class: String,
    pub icon: &'static str,
    pub text: &'static str,
}

impl HealthBadge {
    pub fn for_status(status: HealthStatus) -> Self {
        let (icon, text) = match status {
            HealthStatus::Healthy | HealthStatus::Unknown => ("✓", "Healthy"),
            HealthStatus::Warning => ("⚠", "Warning"),
            HealthStatus::Critical => ("✕", "Critical"),
        };
        HealthBadge {
            class: format!("health-badge {}", status.as_str()),
            icon,
            text,
        }
    }
}

pub fn error_type_icon(error_type: &str) -> &'static str {
    match error_type {
        "WEBSOCKET_DISCONNECT" => "🔌",
        "MEDIA_PLAYER_ERROR" => "🔇",
        "PLAYBACK_FAILURE" => "⏸",
        "STATE_TRANSITION_ERROR" => "⚙️",
        _ => "❌",
    }
}

/// Human-relative age of `timestamp` as seen at `now` (both unix seconds).
pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;
    if diff < MINUTE {
        "just now".to_string()
    } else if diff < HOUR {
        format!("{} min ago", diff / MINUTE)
    } else if diff < DAY {
        format!("{} hours ago", diff / HOUR)
    } else {
        format!("{} days ago", diff / DAY)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorItemView {
    pub icon: &'static str,
    pub error_type: String,
    pub message: String,
    pub time_ago: String,
}

impl ErrorItemView {
    pub fn new(err: &RecentError, now: i64) -> Self {
        ErrorItemView {
            icon: error_type_icon(&err.error_type),
            error_type: err.error_type.clone(),
            message: err.message.clone(),
            time_ago: format_relative_time(err.timestamp, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPanelView {
    pub rate: String,
    pub badge: HealthBadge,
    pub items: Vec<ErrorItemView>,
}

impl ErrorPanelView {
    pub fn new(stats: &ErrorStats, now: i64) -> Self {
        ErrorPanelView {
            rate: format_percent(stats.error_rate),
            badge: HealthBadge::for_status(stats.status),
            items: stats
                .recent_errors
                .iter()
                .map(|err| ErrorItemView::new(err, now))
                .collect(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.items.is_empty()
    }
}
