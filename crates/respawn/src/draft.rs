//! The create-post form's data and submission rules.

use crate::client::ForumApi;
use crate::data::{NewPost, Post};
use crate::errors::{DraftError, SubmitError};
use crate::id::GameId;

/// Text currently typed into the create-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub username: String,
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.title, &self.content]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Builds the request body. Fields go out as typed; trimming only decides blankness.
    pub fn validate(&self, game_id: GameId) -> Result<NewPost, DraftError> {
        if !self.is_complete() {
            return Err(DraftError::MissingFields);
        }

        Ok(NewPost {
            game_id,
            title: self.title.clone(),
            content: self.content.clone(),
            username: self.username.clone(),
        })
    }
}

/// Admits one submission at a time.
///
/// Held outside render state so that two submit events in the same tick see
/// each other: the second `begin` fails until the first call to `finish`.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.in_flight, true)
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_open(&self) -> bool {
        !self.in_flight
    }
}

/// Validates the draft and sends it. An invalid draft never reaches `api`.
pub async fn submit_post<A>(api: &A, game_id: GameId, draft: &PostDraft) -> Result<Post, SubmitError>
where
    A: ForumApi + ?Sized,
{
    let new_post = draft.validate(game_id)?;
    let post = api.create_post(&new_post).await?;
    tracing::info!(post_id = %post.id, %game_id, "post created");
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeForum;
    use futures::executor::block_on;

    fn draft(username: &str, title: &str, content: &str) -> PostDraft {
        PostDraft {
            username: username.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let cases = [
            draft("", "title", "content"),
            draft("kai", "   ", "content"),
            draft("kai", "title", "\n\t"),
            draft("", "", ""),
        ];

        for case in cases {
            assert_eq!(case.validate(GameId::new(1)), Err(DraftError::MissingFields));
        }
    }

    #[test]
    fn test_fields_are_sent_untrimmed() {
        let body = draft(" kai ", "Title", "Body ").validate(GameId::new(9)).unwrap();
        assert_eq!(body.game_id, GameId::new(9));
        assert_eq!(body.username, " kai ");
        assert_eq!(body.content, "Body ");
    }

    #[test]
    fn test_invalid_draft_never_calls_api() {
        let forum = FakeForum::default();

        let result = block_on(submit_post(&forum, GameId::new(7), &draft("kai", "", "body")));

        let err = result.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(DraftError::MissingFields)));
        assert_eq!(err.user_message(), "All fields are required");
        assert!(forum.created().is_empty());
    }

    #[test]
    fn test_gate_admits_one_submission() {
        let mut gate = SubmitGate::default();
        assert!(gate.is_open());

        assert!(gate.begin());
        assert!(!gate.begin());
        assert!(!gate.is_open());

        gate.finish();
        assert!(gate.begin());
    }

    #[test]
    fn test_valid_draft_is_posted() {
        let forum = FakeForum::default();

        let post = block_on(submit_post(
            &forum,
            GameId::new(7),
            &draft("kai", "Great", "Loved the soundtrack"),
        ))
        .unwrap();

        assert_eq!(post.title, "Great");
        let created = forum.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].game_id, GameId::new(7));
        assert_eq!(created[0].username, "kai");
    }

    #[test]
    fn test_backend_failure_has_generic_message() {
        let forum = FakeForum::failing();

        let err = block_on(submit_post(&forum, GameId::new(7), &draft("kai", "t", "c"))).unwrap_err();

        assert!(matches!(err, SubmitError::Api(_)));
        assert_eq!(err.user_message(), "Failed to create post. Please try again.");
    }
}
