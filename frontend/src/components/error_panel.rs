use shared::{ErrorPanelView, ErrorStats};
use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub stats: ErrorStats,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let i18n = use_i18n();
    let expanded = use_state(|| false);
    let view = ErrorPanelView::new(&props.stats, chrono::Utc::now().timestamp());
    let has_errors = view.has_errors();

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class="error-panel">
            <div class="error-summary">
                <span id="error-rate-value" class="error-rate-value">{ view.rate.clone() }</span>
                <span id="health-badge" class={view.badge.class.clone()}>
                    <span class="badge-icon">{ view.badge.icon }</span>
                    <span class="badge-text">{ view.badge.text }</span>
                </span>
            </div>
            <button
                id="error-expand-btn"
                type="button"
                class={classes!("error-expand-btn", (!has_errors).then_some("hidden"))}
                aria-expanded={expanded.to_string()}
                onclick={on_toggle}
            >
                { i18n.t_or("analytics.recentErrors", "Recent errors") }
                <span class="expand-icon">{ if *expanded { "▲" } else { "▼" } }</span>
            </button>
            <div
                id="error-list-container"
                class={classes!("error-list-container", (!has_errors || !*expanded).then_some("hidden"))}
            >
                <ul id="error-list" class="error-list">
                    { for view.items.iter().map(|item| html! {
                        <li class="error-item">
                            <span class="error-icon">{ item.icon }</span>
                            <div class="error-content">
                                <span class="error-type">{ item.error_type.clone() }</span>
                                <span class="error-message">{ item.message.clone() }</span>
                                <span class="error-time">{ item.time_ago.clone() }</span>
                            </div>
                        </li>
                    }) }
                </ul>
            </div>
            <p id="no-errors-msg" class={classes!("no-errors-msg", has_errors.then_some("hidden"))}>
                { i18n.t_or("analytics.noErrors", "No errors recorded") }
            </p>
        </div>
    }
}
