//! Per-view fetch state and the loaders that drive it.

use std::fmt::Display;

use crate::api::ApiResult;
use crate::client::ForumApi;
use crate::data::{Game, Post};
use crate::id::GameId;
use crate::log::{error, info};

/// Fetch state owned by one view activation.
///
/// `Ready` and `Failed` are terminal; a fresh activation builds a new machine.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn start(self) -> Self {
        match self {
            LoadState::Idle => LoadState::Loading,
            other => other,
        }
    }

    pub fn finish<E: Display>(self, result: Result<T, E>) -> Self {
        match self {
            LoadState::Loading => match result {
                Ok(data) => LoadState::Ready(data),
                Err(err) => LoadState::Failed(err.to_string()),
            },
            other => other,
        }
    }

    /// True until the fetch settles. `Idle` counts, since views render once before their effect runs.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// What the discussion view shows for one game.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Discussion {
    /// Missing when the game lookup failed; the posts still render.
    pub game: Option<Game>,
    pub posts: Vec<Post>,
}

impl Discussion {
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

pub async fn load_games<A>(api: &A) -> ApiResult<Vec<Game>>
where
    A: ForumApi + ?Sized,
{
    match api.list_games().await {
        Ok(games) => {
            info!(count = games.len(), "games loaded");
            Ok(games)
        }
        Err(err) => {
            error!("Error fetching games: {err}");
            Err(err)
        }
    }
}

/// Fetches the game and its posts concurrently.
///
/// Either half may fail on its own and is logged and left empty. Only when both
/// fail does the load fail.
pub async fn load_discussion<A>(api: &A, game_id: GameId) -> ApiResult<Discussion>
where
    A: ForumApi + ?Sized,
{
    let (game, posts) = futures::join!(api.get_game(game_id), api.list_posts(game_id));

    match (game, posts) {
        (Ok(game), Ok(posts)) => {
            info!(%game_id, count = posts.len(), "discussion loaded");
            Ok(Discussion {
                game: Some(game),
                posts,
            })
        }
        (Err(err), Ok(posts)) => {
            error!("Error fetching game details for {game_id}: {err}");
            Ok(Discussion { game: None, posts })
        }
        (Ok(game), Err(err)) => {
            error!("Error fetching posts for {game_id}: {err}");
            Ok(Discussion {
                game: Some(game),
                posts: Vec::new(),
            })
        }
        (Err(game_err), Err(err)) => {
            error!("Error fetching game details for {game_id}: {game_err}");
            error!("Error fetching posts for {game_id}: {err}");
            Err(err)
        }
    }
}
