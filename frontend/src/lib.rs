use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::I18nProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod i18n;
pub mod timers;
pub mod pages {
    pub mod analytics_dashboard;
    pub mod not_found;
    pub mod player;
}

use pages::{analytics_dashboard::AnalyticsDashboard, not_found::NotFound, player::PlayerPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/beatify/analytics")]
    Analytics,
    #[at("/beatify/play")]
    Play,
    #[not_found]
    #[at("/beatify/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <I18nProvider>
            <BrowserRouter>
                <main class="app-container">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </I18nProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Analytics => html! { <AnalyticsDashboard /> },
        Route::Play => html! { <PlayerPage /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Initializing Beatify web...");

    // Static markup outside #app keeps its data-i18n attributes.
    match gloo_utils::document().get_element_by_id("app") {
        Some(root) => {
            info!("Mounting application to #app");
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            info!("No #app element, mounting to body");
            yew::Renderer::<App>::new().render();
        }
    }

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
