use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SharedError;

/// Time window the analytics endpoint aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "all")]
    All,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 4] = [
        AnalyticsPeriod::SevenDays,
        AnalyticsPeriod::ThirtyDays,
        AnalyticsPeriod::NinetyDays,
        AnalyticsPeriod::All,
    ];

    /// Query-string value, also used as the `data-period` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::SevenDays => "7d",
            AnalyticsPeriod::ThirtyDays => "30d",
            AnalyticsPeriod::NinetyDays => "90d",
            AnalyticsPeriod::All => "all",
        }
    }

    /// Translation key for the selector button label.
    pub fn label_key(&self) -> &'static str {
        match self {
            AnalyticsPeriod::SevenDays => "analytics.period7d",
            AnalyticsPeriod::ThirtyDays => "analytics.period30d",
            AnalyticsPeriod::NinetyDays => "analytics.period90d",
            AnalyticsPeriod::All => "analytics.periodAll",
        }
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsPeriod {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalyticsPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SharedError::MissingField(format!("period '{}'", s)))
    }
}

/// Relative change per metric versus the previous period, in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Trends {
    pub games: f64,
    pub players: f64,
    pub score: f64,
    pub errors: f64,
}

/// Response body of `GET /beatify/api/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    pub total_games: u64,
    pub avg_players_per_game: f64,
    pub avg_score: f64,
    pub error_rate: f64,
    pub trends: Trends,
    /// Unix seconds.
    pub generated_at: i64,
    #[serde(default)]
    pub playlists: Option<Vec<PlaylistStat>>,
    #[serde(default)]
    pub chart_data: Option<ChartData>,
    #[serde(default)]
    pub error_stats: Option<ErrorStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistStat {
    pub name: String,
    pub play_count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label/value pairs, truncated to the shorter of the two arrays.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy | HealthStatus::Unknown => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    /// Unix seconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorStats {
    pub error_rate: f64,
    #[serde(default)]
    pub status: HealthStatus,
    #[serde(default)]
    pub recent_errors: Vec<RecentError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("7d", AnalyticsPeriod::SevenDays)]
    #[test_case("30d", AnalyticsPeriod::ThirtyDays)]
    #[test_case("90d", AnalyticsPeriod::NinetyDays)]
    #[test_case("all", AnalyticsPeriod::All)]
    fn test_period_parse(raw: &str, expected: AnalyticsPeriod) {
        assert_eq!(raw.parse::<AnalyticsPeriod>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[test]
    fn test_period_rejects_unknown() {
        assert!("1y".parse::<AnalyticsPeriod>().is_err());
        assert_eq!(AnalyticsPeriod::default(), AnalyticsPeriod::ThirtyDays);
    }

    #[test]
    fn test_minimal_payload_deserializes() {
        let payload: AnalyticsPayload = serde_json::from_value(json!({
            "total_games": 12,
            "avg_players_per_game": 4.25,
            "avg_score": 61.0,
            "error_rate": 0.02,
            "trends": {"games": 0.1, "players": 0.0, "score": -0.05, "errors": -0.2},
            "generated_at": 1_700_000_000
        }))
        .unwrap();

        assert_eq!(payload.total_games, 12);
        assert!(payload.playlists.is_none());
        assert!(payload.chart_data.is_none());
        assert!(payload.error_stats.is_none());
        assert_eq!(payload.trends.errors, -0.2);
    }

    #[test]
    fn test_full_payload_deserializes() {
        let payload: AnalyticsPayload = serde_json::from_value(json!({
            "total_games": 3,
            "avg_players_per_game": 2.0,
            "avg_score": 10.0,
            "error_rate": 0.5,
            "trends": {"games": 0, "players": 0, "score": 0, "errors": 0},
            "generated_at": 1,
            "playlists": [{"name": "80s Hits", "play_count": 2, "percentage": 66.7}],
            "chart_data": {"labels": ["Mon", "Tue"], "values": [1, 2]},
            "error_stats": {
                "error_rate": 0.5,
                "status": "critical",
                "recent_errors": [
                    {"type": "PLAYBACK_FAILURE", "message": "boom", "timestamp": 0}
                ]
            }
        }))
        .unwrap();

        let stats = payload.error_stats.unwrap();
        assert_eq!(stats.status, HealthStatus::Critical);
        assert_eq!(stats.recent_errors[0].error_type, "PLAYBACK_FAILURE");
        assert_eq!(payload.chart_data.unwrap().values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_unknown_health_status() {
        let stats: ErrorStats =
            serde_json::from_value(json!({"error_rate": 0.0, "status": "degraded"})).unwrap();
        assert_eq!(stats.status, HealthStatus::Unknown);
        assert_eq!(stats.status.as_str(), "healthy");
        assert!(stats.recent_errors.is_empty());
    }

    #[test]
    fn test_chart_points_truncate_to_shorter() {
        let chart = ChartData {
            labels: vec!["a".into(), "b".into(), "c".into()],
            values: vec![1.0, 2.0],
        };
        let points: Vec<_> = chart.points().collect();
        assert_eq!(points, vec![("a", 1.0), ("b", 2.0)]);
    }
}
