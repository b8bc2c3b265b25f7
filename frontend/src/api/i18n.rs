use log::warn;
use serde_json::Value;
use shared::{Bundle, Language};

use crate::api::utils::get_json;
use crate::config::Config;

pub fn bundle_url(language: Language) -> String {
    format!("{}/{}.json", Config::i18n_base_url(), language.code())
}

/// Never fails: a missing or broken bundle comes back empty so lookups fall
/// through to English or the key.
pub async fn fetch_bundle(language: Language) -> Bundle {
    match get_json::<Value>(&bundle_url(language)).await {
        Ok(value) => Bundle::from_value(value),
        Err(e) => {
            warn!("[i18n] Failed to load {}.json: {}", language, e);
            Bundle::empty()
        }
    }
}
