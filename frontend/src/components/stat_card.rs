use shared::{StatCardKind, StatCardView};
use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub kind: StatCardKind,
    /// `None` until the first successful load.
    #[prop_or_default]
    pub view: Option<StatCardView>,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let i18n = use_i18n();
    let (value, trend_text, trend_class) = match &props.view {
        Some(view) => (
            view.value.clone(),
            view.trend.text.clone(),
            view.trend.class.css(),
        ),
        None => ("—".to_string(), String::new(), "stat-trend".to_string()),
    };

    html! {
        <div id={props.kind.element_id()} class={classes!("stat-card", props.loading.then_some("loading"))}>
            <span class="stat-label">{ i18n.t(props.kind.label_key()) }</span>
            <span class="stat-value">{ value }</span>
            <span class={trend_class}>{ trend_text }</span>
        </div>
    }
}
