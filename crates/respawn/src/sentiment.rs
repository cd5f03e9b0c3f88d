//! Bucketing of backend sentiment scores into display tones.

use crate::data::{Game, SentimentLabel};

/// Scores strictly above this read as positive, strictly below its negation as negative.
pub const TONE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
    /// No score yet, typically a game nobody has posted about.
    Unrated,
}

impl Tone {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Tone::Unrated,
            Some(s) if s > TONE_THRESHOLD => Tone::Positive,
            Some(s) if s < -TONE_THRESHOLD => Tone::Negative,
            Some(_) => Tone::Neutral,
        }
    }

    pub fn from_label(label: &SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => Tone::Positive,
            SentimentLabel::Negative => Tone::Negative,
            SentimentLabel::Neutral | SentimentLabel::Other(_) => Tone::Neutral,
        }
    }

    /// Face shown next to a game's sentiment chip. Unrated shares the neutral face.
    pub fn glyph(&self) -> &'static str {
        match self {
            Tone::Positive => "😄",
            Tone::Negative => "😞",
            Tone::Neutral | Tone::Unrated => "😐",
        }
    }
}

/// Text of the aggregate sentiment chip on a game card.
pub fn badge_label(score: Option<f64>) -> String {
    match score {
        // Halves round away from zero
        Some(s) => format!("{:.0}% Positive", (s * 100.0).round()),
        None => "No reviews yet".to_string(),
    }
}

/// Everything a game card needs to show its sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentBadge {
    pub tone: Tone,
    pub label: String,
}

impl SentimentBadge {
    pub fn for_game(game: &Game) -> Self {
        Self {
            tone: Tone::from_score(game.avg_sentiment),
            label: badge_label(game.avg_sentiment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::GameId;

    fn game(avg_sentiment: Option<f64>) -> Game {
        Game {
            id: GameId::new(1),
            name: "Celeste".to_string(),
            genre: "Platformer".to_string(),
            description: String::new(),
            image_url: String::new(),
            avg_sentiment,
            post_count: None,
            created_at: None,
        }
    }

    #[test]
    fn test_unrated_game_badge() {
        let badge = SentimentBadge::for_game(&game(None));
        assert_eq!(badge.label, "No reviews yet");
        assert_eq!(badge.tone, Tone::Unrated);
        assert_eq!(badge.tone.glyph(), Tone::Neutral.glyph());
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(Tone::from_score(Some(0.3)), Tone::Neutral);
        assert_eq!(Tone::from_score(Some(-0.3)), Tone::Neutral);
        assert_eq!(Tone::from_score(Some(0.31)), Tone::Positive);
        assert_eq!(Tone::from_score(Some(-0.31)), Tone::Negative);
        assert_eq!(Tone::from_score(Some(0.0)), Tone::Neutral);
        assert_eq!(Tone::from_score(Some(1.0)), Tone::Positive);
        assert_eq!(Tone::from_score(Some(-1.0)), Tone::Negative);
    }

    #[test]
    fn test_badge_label_percentages() {
        assert_eq!(badge_label(Some(0.82)), "82% Positive");
        assert_eq!(badge_label(Some(0.0)), "0% Positive");
        assert_eq!(badge_label(Some(-0.5)), "-50% Positive");
        assert_eq!(badge_label(Some(0.125)), "13% Positive");
        assert_eq!(badge_label(Some(0.625)), "63% Positive");
        assert_eq!(badge_label(Some(-0.125)), "-13% Positive");
    }

    #[test]
    fn test_label_tones() {
        assert_eq!(Tone::from_label(&SentimentLabel::Positive), Tone::Positive);
        assert_eq!(Tone::from_label(&SentimentLabel::Negative), Tone::Negative);
        assert_eq!(Tone::from_label(&SentimentLabel::Neutral), Tone::Neutral);
        assert_eq!(
            Tone::from_label(&SentimentLabel::Other("MIXED".into())),
            Tone::Neutral
        );
    }
}
