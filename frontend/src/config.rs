use std::time::Duration;

use shared::models::chart::CHART_HEIGHT;
use shared::models::dashboard::RetryPolicy;
use shared::AnalyticsPeriod;

pub struct Config;

impl Config {
    /// All endpoints live under the add-on's `/beatify` prefix on the Home
    /// Assistant host, so relative URLs work in dev (Trunk proxy) and in
    /// production alike.
    pub fn api_base_url() -> &'static str {
        "/beatify/api"
    }

    pub fn i18n_base_url() -> &'static str {
        "/beatify/static/i18n"
    }

    pub fn default_period() -> AnalyticsPeriod {
        AnalyticsPeriod::ThirtyDays
    }

    pub fn retry_policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    pub fn resize_debounce() -> Duration {
        Duration::from_millis(150)
    }

    pub fn chart_height() -> u32 {
        CHART_HEIGHT as u32
    }
}
