pub mod analytics;
pub mod game_status;
pub mod i18n;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    format!("{}{}", Config::api_base_url(), path)
}
