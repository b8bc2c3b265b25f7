pub mod chart_renderer;
pub mod error_panel;
pub mod period_selector;
pub mod playlist_list;
pub mod stat_card;
