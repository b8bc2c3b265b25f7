use std::rc::Rc;

use log::{debug, error, info};
use serde::Deserialize;
use shared::{GameStatusRequest, PlayerView};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::game_status::get_game_status;
use crate::i18n::use_i18n;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlayerQuery {
    pub game: Option<String>,
}

/// Resolves the view for a raw `game` query value. Malformed ids never reach
/// the network.
pub async fn check_game_status(game: Option<String>) -> PlayerView {
    let request = match GameStatusRequest::parse(game.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            info!("Rejecting game id before lookup: {}", e);
            return PlayerView::NotFound;
        }
    };

    let result = get_game_status(&request).await;
    if let Err(e) = &result {
        error!("Failed to check game status: {}", e);
    }
    PlayerView::from_result(result)
}

/// `hidden` on every view but `active`.
pub fn view_class(view: PlayerView, active: PlayerView) -> Classes {
    classes!("player-view", (view != active).then_some("hidden"))
}

#[derive(Properties, PartialEq)]
pub struct PlayerPageProps {}

#[function_component(PlayerPage)]
pub fn player_page(_props: &PlayerPageProps) -> Html {
    let i18n = use_i18n();
    let location = use_location();
    let game = location
        .and_then(|loc| loc.query::<PlayerQuery>().ok())
        .and_then(|query| query.game);

    let view = use_state(PlayerView::default);
    // Only the latest check may set the view.
    let latest = use_mut_ref(|| 0u64);

    let run_check = {
        let view = view.clone();
        let latest = latest.clone();
        let game = game.clone();
        Rc::new(move || {
            let check = {
                let mut latest = latest.borrow_mut();
                *latest += 1;
                *latest
            };
            view.set(PlayerView::Loading);

            let view = view.clone();
            let latest = latest.clone();
            let game = game.clone();
            spawn_local(async move {
                let resolved = check_game_status(game).await;
                if *latest.borrow() == check {
                    debug!("Showing {}", resolved.element_id());
                    view.set(resolved);
                }
            });
        })
    };

    {
        let run_check = run_check.clone();
        use_effect_with(game.clone(), move |_| {
            run_check();
            || ()
        });
    }

    let on_check = {
        let run_check = run_check.clone();
        Callback::from(move |_: MouseEvent| run_check())
    };

    let active = *view;

    html! {
        <div class="player-page">
            <div id={PlayerView::Loading.element_id()} class={view_class(PlayerView::Loading, active)}>
                <p>{ i18n.t_or("player.loading", "Checking game...") }</p>
            </div>
            <div id={PlayerView::NotFound.element_id()} class={view_class(PlayerView::NotFound, active)}>
                <h1>{ i18n.t_or("player.notFoundTitle", "Game not found") }</h1>
                <p>{ i18n.error_message("GAME_NOT_FOUND") }</p>
                <button id="retry-btn" type="button" class="btn" onclick={on_check.clone()}>
                    { i18n.t_or("player.retry", "Try again") }
                </button>
            </div>
            <div id={PlayerView::Ended.element_id()} class={view_class(PlayerView::Ended, active)}>
                <h1>{ i18n.t_or("player.endedTitle", "Game over") }</h1>
                <p>{ i18n.error_message("GAME_ENDED") }</p>
            </div>
            <div id={PlayerView::InProgress.element_id()} class={view_class(PlayerView::InProgress, active)}>
                <h1>{ i18n.t_or("player.inProgressTitle", "Game in progress") }</h1>
                <p>{ i18n.t_or("player.inProgressText", "You can join when the current round is over.") }</p>
                <button id="refresh-btn" type="button" class="btn" onclick={on_check}>
                    { i18n.t_or("player.refresh", "Refresh") }
                </button>
            </div>
            <div id={PlayerView::Join.element_id()} class={view_class(PlayerView::Join, active)}>
                <h1>{ i18n.t_or("player.joinTitle", "Join the game") }</h1>
                <p>{ i18n.t_or("player.joinText", "The game is open. Get ready to play!") }</p>
            </div>
        </div>
    }
}
