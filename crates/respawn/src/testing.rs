//! In-memory [`ForumApi`] double for unit tests.

use std::cell::RefCell;

use crate::api::{ApiError, ApiResult};
use crate::client::ForumApi;
use crate::data::{Game, NewPost, Post};
use crate::id::{GameId, PostId};

#[derive(Default)]
pub struct FakeForum {
    pub games: Vec<Game>,
    pub posts: Vec<Post>,
    pub fail_games: bool,
    pub fail_posts: bool,
    pub(crate) created: RefCell<Vec<NewPost>>,
}

impl FakeForum {
    /// Every call errors.
    pub fn failing() -> Self {
        Self {
            fail_games: true,
            fail_posts: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<NewPost> {
        self.created.borrow().clone()
    }
}

pub fn game(id: i64, name: &str) -> Game {
    Game {
        id: GameId::new(id),
        name: name.to_string(),
        genre: "RPG".to_string(),
        description: String::new(),
        image_url: String::new(),
        avg_sentiment: None,
        post_count: None,
        created_at: None,
    }
}

pub fn post(id: i64, game_id: i64, title: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        content: "content".to_string(),
        username: "kai".to_string(),
        sentiment_label: None,
        sentiment_score: None,
        confidence: None,
        created_at: "2024-01-05T10:00:00".to_string(),
        updated_at: None,
        game_id: Some(GameId::new(game_id)),
        game_name: None,
    }
}

#[async_trait::async_trait(?Send)]
impl ForumApi for FakeForum {
    async fn list_games(&self) -> ApiResult<Vec<Game>> {
        if self.fail_games {
            return Err(ApiError::InternalServerError);
        }
        Ok(self.games.clone())
    }

    async fn get_game(&self, id: GameId) -> ApiResult<Game> {
        if self.fail_games {
            return Err(ApiError::InternalServerError);
        }
        self.games
            .iter()
            .find(|game| game.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/api/games/{id} not found")))
    }

    async fn list_posts(&self, game_id: GameId) -> ApiResult<Vec<Post>> {
        if self.fail_posts {
            return Err(ApiError::InternalServerError);
        }
        Ok(self
            .posts
            .iter()
            .filter(|post| post.game_id == Some(game_id))
            .cloned()
            .collect())
    }

    async fn create_post(&self, new_post: &NewPost) -> ApiResult<Post> {
        if self.fail_posts {
            return Err(ApiError::InternalServerError);
        }
        self.created.borrow_mut().push(new_post.clone());

        let mut created = post(
            self.created.borrow().len() as i64,
            new_post.game_id.value(),
            &new_post.title,
        );
        created.content = new_post.content.clone();
        created.username = new_post.username.clone();
        Ok(created)
    }
}
