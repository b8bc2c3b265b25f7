use log::debug;
use shared::{AnalyticsPayload, AnalyticsPeriod, Result};

use crate::api::api_url;
use crate::api::utils::{get_json, with_query};

pub fn analytics_url(period: AnalyticsPeriod) -> String {
    with_query(&api_url("/analytics"), "period", period.as_str())
}

pub async fn get_analytics(period: AnalyticsPeriod) -> Result<AnalyticsPayload> {
    debug!("Fetching analytics for period {}", period);
    let payload: AnalyticsPayload = get_json(&analytics_url(period)).await?;
    debug!(
        "Analytics received: {} games, generated at {}",
        payload.total_games, payload.generated_at
    );
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_url() {
        assert_eq!(
            analytics_url(AnalyticsPeriod::SevenDays),
            "/beatify/api/analytics?period=7d"
        );
        assert_eq!(
            analytics_url(AnalyticsPeriod::All),
            "/beatify/api/analytics?period=all"
        );
    }
}
