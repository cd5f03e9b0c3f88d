use respawn::data::Post;
use yew::prelude::*;

use crate::components::PostSentiment;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;

    html! {
        <article class="mb-4 p-4 bg-[var(--color-paper)] rounded-[var(--radius-card)] shadow">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-2">
                    <div class="h-8 w-8 rounded-full bg-gray-600 flex items-center justify-center">
                        <span aria-hidden="true">{ "👤" }</span>
                    </div>
                    <span class="text-sm font-medium">{ &post.username }</span>
                    <span class="text-xs text-[var(--color-text-secondary)]">
                        { format!("• {}", post.posted_on()) }
                    </span>
                </div>
                {
                    if let Some(label) = &post.sentiment_label {
                        html! { <PostSentiment label={label.clone()} confidence={post.confidence} /> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <h3 class="text-lg font-medium mb-2">{ &post.title }</h3>
            <p class="text-sm text-[var(--color-text-secondary)] whitespace-pre-line">{ &post.content }</p>
        </article>
    }
}
