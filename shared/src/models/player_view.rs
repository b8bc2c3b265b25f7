use crate::dto::game_status::GameStatus;
use crate::error::Result;

/// The player landing page shows exactly one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerView {
    #[default]
    Loading,
    NotFound,
    Ended,
    InProgress,
    Join,
}

impl PlayerView {
    pub const ALL: [PlayerView; 5] = [
        PlayerView::Loading,
        PlayerView::NotFound,
        PlayerView::Ended,
        PlayerView::InProgress,
        PlayerView::Join,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            PlayerView::Loading => "loading-view",
            PlayerView::NotFound => "not-found-view",
            PlayerView::Ended => "ended-view",
            PlayerView::InProgress => "in-progress-view",
            PlayerView::Join => "join-view",
        }
    }

    pub fn for_status(status: &GameStatus) -> Self {
        if !status.exists {
            PlayerView::NotFound
        } else if status.has_ended() {
            PlayerView::Ended
        } else if status.is_joinable() {
            PlayerView::Join
        } else {
            PlayerView::InProgress
        }
    }

    /// Any failure lands on `NotFound`; the page never guesses a game is joinable.
    pub fn from_result(result: Result<GameStatus>) -> Self {
        match result {
            Ok(status) => PlayerView::for_status(&status),
            Err(_) => PlayerView::NotFound,
        }
    }
}
