use respawn::data::SentimentLabel;
use respawn::sentiment::{SentimentBadge, Tone};
use yew::prelude::*;

fn chip_classes(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-green-700 text-white",
        Tone::Negative => "bg-red-700 text-white",
        Tone::Neutral => "bg-amber-600 text-white",
        Tone::Unrated => "bg-gray-600 text-gray-100",
    }
}

#[derive(Properties, PartialEq)]
pub struct GameSentimentProps {
    pub badge: SentimentBadge,
}

/// Face and chip summarising a game's aggregate sentiment.
#[function_component(GameSentiment)]
pub fn game_sentiment(props: &GameSentimentProps) -> Html {
    let badge = &props.badge;

    html! {
        <div class="flex items-center gap-2">
            <span class="text-xl" aria-hidden="true">{ badge.tone.glyph() }</span>
            <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", chip_classes(badge.tone))}>
                { &badge.label }
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PostSentimentProps {
    pub label: SentimentLabel,
    #[prop_or_default]
    pub confidence: Option<f64>,
}

/// Chip with the backend's label for a single post.
#[function_component(PostSentiment)]
pub fn post_sentiment(props: &PostSentimentProps) -> Html {
    // Neutral posts keep the plain chip; only games use the amber one
    let classes = match Tone::from_label(&props.label) {
        Tone::Neutral => chip_classes(Tone::Unrated),
        tone => chip_classes(tone),
    };
    let hint = props
        .confidence
        .map(|confidence| format!("{:.0}% confidence", confidence * 100.0));

    html! {
        <span
            class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", classes)}
            title={hint}
        >
            { props.label.as_str() }
        </span>
    }
}
