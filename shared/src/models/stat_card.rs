use crate::dto::analytics::AnalyticsPayload;

/// CSS modifier applied to a card's `.stat-trend` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendClass {
    Positive,
    Negative,
    Neutral,
}

impl TrendClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendClass::Positive => "positive",
            TrendClass::Negative => "negative",
            TrendClass::Neutral => "neutral",
        }
    }

    pub fn css(&self) -> String {
        format!("stat-trend {}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendView {
    pub text: String,
    pub class: TrendClass,
}

impl TrendView {
    /// `invert` marks metrics where a falling value is the good outcome. It
    /// only changes the class; the arrow always follows the sign.
    pub fn new(trend: f64, invert: bool) -> Self {
        if trend == 0.0 {
            return TrendView {
                text: "— 0%".to_string(),
                class: TrendClass::Neutral,
            };
        }

        let is_positive = if invert { trend < 0.0 } else { trend > 0.0 };
        let arrow = if trend > 0.0 { '↑' } else { '↓' };
        let pct = (trend.abs() * 100.0).round() as i64;

        TrendView {
            text: format!("{} {}%", arrow, pct),
            class: if is_positive {
                TrendClass::Positive
            } else {
                TrendClass::Negative
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCardKind {
    TotalGames,
    AvgPlayers,
    AvgScore,
    ErrorRate,
}

impl StatCardKind {
    pub const ALL: [StatCardKind; 4] = [
        StatCardKind::TotalGames,
        StatCardKind::AvgPlayers,
        StatCardKind::AvgScore,
        StatCardKind::ErrorRate,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            StatCardKind::TotalGames => "stat-total-games",
            StatCardKind::AvgPlayers => "stat-avg-players",
            StatCardKind::AvgScore => "stat-avg-score",
            StatCardKind::ErrorRate => "stat-error-rate",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            StatCardKind::TotalGames => "analytics.totalGames",
            StatCardKind::AvgPlayers => "analytics.avgPlayers",
            StatCardKind::AvgScore => "analytics.avgScore",
            StatCardKind::ErrorRate => "analytics.errorRate",
        }
    }

    /// Fewer errors is good news.
    pub fn inverts_trend(&self) -> bool {
        matches!(self, StatCardKind::ErrorRate)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardView {
    pub kind: StatCardKind,
    pub value: String,
    pub trend: TrendView,
}

/// One decimal, with exact halves rounded away from zero (`2.25` -> `2.3`).
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

pub fn format_percent(rate: f64) -> String {
    format!("{}%", format_one_decimal(rate * 100.0))
}

/// Builds the four cards in display order.
pub fn stat_cards(payload: &AnalyticsPayload) -> [StatCardView; 4] {
    StatCardKind::ALL.map(|kind| {
        let (value, trend) = match kind {
            StatCardKind::TotalGames => (payload.total_games.to_string(), payload.trends.games),
            StatCardKind::AvgPlayers => (
                format_one_decimal(payload.avg_players_per_game),
                payload.trends.players,
            ),
            StatCardKind::AvgScore => (format_one_decimal(payload.avg_score), payload.trends.score),
            StatCardKind::ErrorRate => (format_percent(payload.error_rate), payload.trends.errors),
        };
        StatCardView {
            kind,
            value,
            trend: TrendView::new(trend, kind.inverts_trend()),
        }
    })
}
