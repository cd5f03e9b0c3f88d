use respawn::id::GameId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{CreatePostPage, DiscussionPage, GamesPage, NotFoundPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Games,
    #[at("/game/:id")]
    Discussion { id: GameId },
    #[at("/game/:id/create-post")]
    CreatePost { id: GameId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where the create-post form sends the user once the backend accepts the post.
pub fn after_post_created(id: GameId) -> Route {
    Route::Discussion { id }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Games => html! { <GamesPage /> },
        Route::Discussion { id } => html! { <DiscussionPage {id} /> },
        Route::CreatePost { id } => html! { <CreatePostPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Games.to_path(), "/");
        assert_eq!(Route::Discussion { id: GameId::new(7) }.to_path(), "/game/7");
        assert_eq!(
            Route::CreatePost { id: GameId::new(7) }.to_path(),
            "/game/7/create-post"
        );
    }

    #[test]
    fn test_created_post_returns_to_its_discussion() {
        let id = GameId::new(7);
        let target = after_post_created(id);
        assert_eq!(target, Route::Discussion { id });
        assert_eq!(target.to_path(), "/game/7");

        // The form's own route id, not some other game
        let form = Route::recognize("/game/42/create-post").unwrap();
        let Route::CreatePost { id } = form else {
            panic!("expected the create-post route, got {form:?}");
        };
        assert_eq!(after_post_created(id).to_path(), "/game/42");
    }

    #[test]
    fn test_recognize() {
        assert_eq!(
            Route::recognize("/game/12"),
            Some(Route::Discussion { id: GameId::new(12) })
        );
        assert_eq!(
            Route::recognize("/game/12/create-post"),
            Some(Route::CreatePost { id: GameId::new(12) })
        );
    }
}
