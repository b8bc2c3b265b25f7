pub mod models {
    pub mod chart;
    pub mod dashboard;
    pub mod error_panel;
    pub mod player_view;
    pub mod playlist;
    pub mod stat_card;
}

pub mod dto {
    pub mod analytics;
    pub mod game_status;
}

pub mod error;
pub mod i18n;

// Re-export commonly used items
pub use error::{Result, SharedError};
pub use i18n::{Bundle, Language, Translator};

// Re-export DTOs
pub use dto::{
    analytics::{
        AnalyticsPayload, AnalyticsPeriod, ChartData, ErrorStats, HealthStatus, PlaylistStat,
        RecentError, Trends,
    },
    game_status::{GameStatus, GameStatusRequest},
};

// Re-export view models
pub use models::{
    chart::{layout_chart, ChartScene},
    dashboard::{DashboardController, FailureOutcome, LoadTicket, LoadTrigger, RetryPolicy},
    error_panel::ErrorPanelView,
    player_view::PlayerView,
    playlist::{playlist_rows, PlaylistRow},
    stat_card::{stat_cards, StatCardKind, StatCardView, TrendClass},
};
