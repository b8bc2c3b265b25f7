use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SharedError};

lazy_static! {
    /// Game ids are URL-safe tokens of 8 to 16 characters.
    static ref GAME_ID_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_-]{8,16}$").unwrap();
}

/// Response body of `GET /beatify/api/game-status`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameStatus {
    pub exists: bool,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub can_join: Option<bool>,
}

impl GameStatus {
    pub fn has_ended(&self) -> bool {
        self.phase.as_deref() == Some("END")
    }

    pub fn is_joinable(&self) -> bool {
        self.can_join.unwrap_or(false)
    }
}

/// Query for the game status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GameStatusRequest {
    #[validate(regex = "GAME_ID_REGEX")]
    pub game: String,
}

impl GameStatusRequest {
    /// Builds a request from an optional raw `game` query value, rejecting
    /// absent or malformed ids before anything touches the network.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let game = raw.ok_or_else(|| SharedError::MissingField("game".to_string()))?;
        let request = GameStatusRequest {
            game: game.to_string(),
        };
        request
            .validate()
            .map_err(|_| SharedError::InvalidGameId(game.to_string()))?;
        Ok(request)
    }
}

pub fn is_valid_game_id(id: &str) -> bool {
    GameStatusRequest::parse(Some(id)).is_ok()
}
