use log::debug;
use shared::{GameStatus, GameStatusRequest, Result};

use crate::api::api_url;
use crate::api::utils::{get_json_any_status, with_query};

pub fn game_status_url(request: &GameStatusRequest) -> String {
    with_query(&api_url("/game-status"), "game", &request.game)
}

/// The body decides the outcome, so it is decoded regardless of status; a
/// body that is not a `GameStatus` is an error.
pub async fn get_game_status(request: &GameStatusRequest) -> Result<GameStatus> {
    debug!("Checking status of game {}", request.game);
    get_json_any_status(&game_status_url(request)).await
}
