//! Data structures exchanged with the forum backend.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::id::{GameId, PostId};

/// The backend sends `null` for optional text columns; render those as empty.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A catalog entry users can discuss. Read-only on this side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub genre: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_url: String,
    /// Mean of the post sentiment scores, absent when nobody has posted.
    #[serde(default)]
    pub avg_sentiment: Option<f64>,
    #[serde(default)]
    pub post_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Game {
    pub fn post_count(&self) -> u32 {
        self.post_count.unwrap_or(0)
    }
}

/// Backend sentiment classification of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Other(label) => label,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            "NEUTRAL" => SentimentLabel::Neutral,
            _ => SentimentLabel::Other(value),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SentimentLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SentimentLabel::from)
    }
}

/// A discussion entry tied to one game. Sentiment fields are filled in by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub username: String,
    #[serde(default)]
    pub sentiment_label: Option<SentimentLabel>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub game_id: Option<GameId>,
    #[serde(default)]
    pub game_name: Option<String>,
}

impl Post {
    /// Calendar date the post was created, e.g. `Jan 5, 2024`.
    pub fn posted_on(&self) -> String {
        format_date(&self.created_at)
    }
}

/// Request body for `POST /api/posts`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewPost {
    pub game_id: GameId,
    pub title: String,
    pub content: String,
    pub username: String,
}

/// Renders a backend timestamp as a calendar date, falling back to the raw text.
pub fn format_date(timestamp: &str) -> String {
    const DATE_FORMAT: &str = "%b %-d, %Y";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.format(DATE_FORMAT).to_string();
    }
    // Naive timestamps, with or without fractional seconds
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DATE_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f") {
        return parsed.format(DATE_FORMAT).to_string();
    }

    tracing::warn!(timestamp, "unrecognised timestamp format");
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_from_backend_json() {
        let json = r#"{
            "id": 3,
            "name": "Hollow Knight",
            "genre": "Metroidvania",
            "description": "Bugs and bosses",
            "image_url": "https://example.com/hk.png",
            "created_at": "2024-01-05T10:00:00",
            "avg_sentiment": 0.82,
            "post_count": 12
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, GameId::new(3));
        assert_eq!(game.name, "Hollow Knight");
        assert_eq!(game.avg_sentiment, Some(0.82));
        assert_eq!(game.post_count(), 12);
    }

    #[test]
    fn test_game_with_missing_optionals() {
        let json = r#"{"id": 1, "name": "Tetris", "genre": null, "avg_sentiment": null}"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.genre, "");
        assert_eq!(game.description, "");
        assert_eq!(game.image_url, "");
        assert_eq!(game.avg_sentiment, None);
        assert_eq!(game.post_count(), 0);
    }

    #[test]
    fn test_post_sentiment_labels() {
        let json = r#"[
            {"id": 1, "title": "a", "content": "b", "username": "kai",
             "sentiment_label": "POSITIVE", "sentiment_score": 0.9, "created_at": "2024-01-05T10:00:00"},
            {"id": 2, "title": "a", "content": "b", "username": "kai",
             "sentiment_label": "MIXED", "created_at": "2024-01-05T10:00:00"},
            {"id": 3, "title": "a", "content": "b", "username": null,
             "created_at": "2024-01-05T10:00:00"}
        ]"#;

        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts[0].sentiment_label, Some(SentimentLabel::Positive));
        assert_eq!(
            posts[1].sentiment_label,
            Some(SentimentLabel::Other("MIXED".to_string()))
        );
        assert_eq!(posts[2].sentiment_label, None);
        assert_eq!(posts[2].username, "");
    }

    #[test]
    fn test_new_post_body() {
        let body = NewPost {
            game_id: GameId::new(7),
            title: "Great boss fights".to_string(),
            content: "Loved it".to_string(),
            username: "kai".to_string(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "game_id": 7,
                "title": "Great boss fights",
                "content": "Loved it",
                "username": "kai"
            })
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05T10:00:00"), "Jan 5, 2024");
        assert_eq!(format_date("2024-01-05T10:00:00.123456"), "Jan 5, 2024");
        assert_eq!(format_date("2024-11-20T23:15:00+00:00"), "Nov 20, 2024");
        assert_eq!(format_date("2024-03-09 08:00:00"), "Mar 9, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
