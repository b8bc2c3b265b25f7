//! Translation context for the whole app.
//!
//! `I18nProvider` owns the `Translator`, loads bundles on mount and after
//! `set_language`, and re-applies `data-i18n*` markup whenever bundles change.

pub mod page;

use std::rc::Rc;

use gloo_utils::document;
use log::{debug, info};
use shared::i18n::LoadPlan;
use shared::{Bundle, Language, Translator};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::i18n::fetch_bundle;

pub enum I18nAction {
    Install {
        plan: LoadPlan,
        fallback: Option<Bundle>,
        current: Option<Bundle>,
    },
}

#[derive(Clone, Debug, Default)]
pub struct I18nState {
    pub translator: Rc<Translator>,
}

impl PartialEq for I18nState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.translator, &other.translator)
    }
}

impl Reducible for I18nState {
    type Action = I18nAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            I18nAction::Install {
                plan,
                fallback,
                current,
            } => {
                let mut translator = (*self.translator).clone();
                translator.install(plan, fallback, current);
                Rc::new(Self {
                    translator: Rc::new(translator),
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct I18nContext {
    pub state: I18nState,
    /// Accepts any code; unsupported ones fall back to English.
    pub set_language: Callback<String>,
}

impl I18nContext {
    pub fn t(&self, key: &str) -> String {
        self.state.translator.t(key, &[])
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.state.translator.t(key, params)
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.state.translator.t_or(key, default)
    }

    pub fn error_message(&self, code: &str) -> String {
        self.state.translator.error_message(code)
    }

    pub fn language(&self) -> Language {
        self.state.translator.language()
    }

    pub fn is_ready(&self) -> bool {
        self.state.translator.is_ready()
    }
}

/// Falls back to an unloaded translator when rendered outside the provider,
/// so lookups still return keys.
#[hook]
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().unwrap_or_else(|| I18nContext {
        state: I18nState::default(),
        set_language: Callback::noop(),
    })
}

pub fn detect_browser_language() -> Language {
    let locale = web_sys::window().and_then(|w| w.navigator().language());
    Language::from_browser_locale(locale.as_deref())
}

async fn load_language(translator: Rc<Translator>, language: Language) -> Option<I18nAction> {
    let Some(plan) = translator.plan(language) else {
        debug!("[i18n] {} already loaded", language);
        return None;
    };

    let fallback = if plan.fetch_fallback {
        Some(fetch_bundle(Language::En).await)
    } else {
        None
    };
    let current = match plan.fetch_current {
        Some(lang) => Some(fetch_bundle(lang).await),
        None => None,
    };

    info!("[i18n] Loaded language {}", language);
    Some(I18nAction::Install {
        plan,
        fallback,
        current,
    })
}

fn spawn_set_language(state: UseReducerHandle<I18nState>, language: Language) {
    spawn_local(async move {
        if let Some(action) = load_language(state.translator.clone(), language).await {
            state.dispatch(action);
        }
    });
}

#[derive(Properties, Clone, PartialEq)]
pub struct I18nProviderProps {
    /// Explicit language code; the browser locale is used when absent.
    #[prop_or_default]
    pub language: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let state = use_reducer_eq(I18nState::default);
    let initialized = use_mut_ref(|| false);

    // init: runs once per provider, however often it re-renders
    {
        let state = state.clone();
        let initialized = initialized.clone();
        let requested = props.language.clone();
        use_effect_with((), move |_| {
            if !std::mem::replace(&mut *initialized.borrow_mut(), true) {
                let language = match requested.as_deref() {
                    Some(code) => Language::parse_or_default(code),
                    None => detect_browser_language(),
                };
                spawn_set_language(state, language);
            }
            || ()
        });
    }

    // Re-apply static markup translations after every bundle change.
    {
        let translator = state.translator.clone();
        use_effect_with((*state).clone(), move |_| {
            if translator.is_ready() {
                let doc = document();
                page::apply_language(&doc, translator.language());
                page::init_page_translations(&doc, &translator);
            }
            || ()
        });
    }

    let set_language = {
        let state = state.clone();
        Callback::from(move |code: String| {
            spawn_set_language(state.clone(), Language::parse_or_default(&code));
        })
    };

    let context = I18nContext {
        state: (*state).clone(),
        set_language,
    };

    html! {
        <ContextProvider<I18nContext> context={context}>
            {props.children.clone()}
        </ContextProvider<I18nContext>>
    }
}
