use shared::AnalyticsPeriod;
use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct PeriodSelectorProps {
    pub active: AnalyticsPeriod,
    pub on_select: Callback<AnalyticsPeriod>,
}

#[function_component(PeriodSelector)]
pub fn period_selector(props: &PeriodSelectorProps) -> Html {
    let i18n = use_i18n();

    html! {
        <div class="period-selector" role="group">
            { for AnalyticsPeriod::ALL.into_iter().map(|period| {
                let active = period == props.active;
                html! {
                    <button
                        type="button"
                        class={classes!("period-btn", active.then_some("period-btn--active"))}
                        data-period={period.as_str()}
                        aria-pressed={active.to_string()}
                        onclick={props.on_select.reform(move |_: MouseEvent| period)}
                    >
                        { i18n.t_or(period.label_key(), period.as_str()) }
                    </button>
                }
            }) }
        </div>
    }
}
