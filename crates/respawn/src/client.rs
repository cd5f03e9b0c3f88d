//! The forum's REST surface.

use crate::api::{ApiClient, ApiResult, HttpApiClient};
use crate::config::ForumConfig;
use crate::data::{Game, NewPost, Post};
use crate::id::GameId;

/// Operations the views need from the backend.
#[async_trait::async_trait(?Send)]
pub trait ForumApi {
    async fn list_games(&self) -> ApiResult<Vec<Game>>;

    async fn get_game(&self, id: GameId) -> ApiResult<Game>;

    /// Posts for one game, filtered server-side.
    async fn list_posts(&self, game_id: GameId) -> ApiResult<Vec<Post>>;

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post>;
}

pub fn games_endpoint() -> String {
    "/api/games".to_string()
}

pub fn game_endpoint(id: GameId) -> String {
    format!("/api/games/{id}")
}

pub fn posts_endpoint(game_id: GameId) -> String {
    format!("/api/posts?game_id={game_id}")
}

pub const CREATE_POST_ENDPOINT: &str = "/api/posts";

/// [`ForumApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct ForumClient {
    client: HttpApiClient,
}

impl ForumClient {
    pub fn new(config: &ForumConfig) -> Self {
        let mut client = HttpApiClient::new(config.api_base_url.clone());
        client.set_header("Accept", "application/json");
        Self { client }
    }
}

#[async_trait::async_trait(?Send)]
impl ForumApi for ForumClient {
    async fn list_games(&self) -> ApiResult<Vec<Game>> {
        self.client.get(&games_endpoint()).await
    }

    async fn get_game(&self, id: GameId) -> ApiResult<Game> {
        self.client.get(&game_endpoint(id)).await
    }

    async fn list_posts(&self, game_id: GameId) -> ApiResult<Vec<Post>> {
        self.client.get(&posts_endpoint(game_id)).await
    }

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        self.client.post(CREATE_POST_ENDPOINT, post).await
    }
}
