use log::{debug, error};
use shared::{Language, Translator};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub const TEXT_ATTR: &str = "data-i18n";
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
pub const TITLE_ATTR: &str = "data-i18n-title";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Text,
    Attribute(&'static str),
}

const MARKERS: [(&str, Target); 3] = [
    (TEXT_ATTR, Target::Text),
    (PLACEHOLDER_ATTR, Target::Attribute("placeholder")),
    (TITLE_ATTR, Target::Attribute("title")),
];

/// Rewrites every `data-i18n*` marked element in `document`. Elements whose
/// key has no translation keep their authored content. Returns the number of
/// elements changed.
pub fn init_page_translations(document: &Document, translator: &Translator) -> usize {
    let mut updated = 0;

    for (marker, target) in MARKERS {
        for element in marked_elements(document, marker) {
            let Some(key) = element.get_attribute(marker).filter(|k| !k.is_empty()) else {
                continue;
            };
            let translated = translator.t(&key, &[]);
            if translated == key {
                continue;
            }
            match target {
                Target::Text => element.set_text_content(Some(&translated)),
                Target::Attribute(name) => {
                    if let Err(e) = element.set_attribute(name, &translated) {
                        error!("[i18n] Failed to set {} for {}: {:?}", name, key, e);
                        continue;
                    }
                }
            }
            updated += 1;
        }
    }

    debug!("[i18n] Translated {} page elements", updated);
    updated
}

/// Sets `<html lang>`. Returns false, after logging, when it cannot be set.
pub fn apply_language(document: &Document, language: Language) -> bool {
    let Some(root) = document.document_element() else {
        return false;
    };
    match root.set_attribute("lang", language.code()) {
        Ok(()) => true,
        Err(e) => {
            error!("[i18n] Failed to set lang: {:?}", e);
            false
        }
    }
}

fn marked_elements(document: &Document, marker: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", marker)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
