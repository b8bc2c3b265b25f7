use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {}

#[function_component(NotFound)]
pub fn not_found(_props: &NotFoundProps) -> Html {
    let i18n = use_i18n();
    html! {
        <div class="not-found-page">
            <h1>{ i18n.t_or("common.notFoundTitle", "404 - Page Not Found") }</h1>
            <p>{ i18n.t_or("common.notFoundText", "The page you're looking for doesn't exist.") }</p>
        </div>
    }
}
