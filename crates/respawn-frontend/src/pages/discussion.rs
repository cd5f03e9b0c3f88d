use respawn::id::GameId;
use respawn::load::{Discussion, load_discussion};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PostCard, Spinner};
use crate::hooks::use_load;
use crate::providers::use_api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DiscussionProps {
    pub id: GameId,
}

#[function_component(DiscussionPage)]
pub fn discussion_page(props: &DiscussionProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let state = use_load(props.id, move |id| async move { load_discussion(&*api, id).await });

    if state.is_pending() {
        return html! { <Spinner /> };
    }

    // Failures were logged by the loader and render like an empty thread
    let empty = Discussion::default();
    let discussion = state.ready().unwrap_or(&empty);

    let new_post = {
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CreatePost { id });
            }
        })
    };

    html! {
        <main class="container max-w-3xl mx-auto px-4 mt-8 mb-8">
            {
                if let Some(game) = &discussion.game {
                    html! {
                        <section class="mb-8">
                            <h1 class="text-3xl font-semibold mb-2">{ &game.name }</h1>
                            <span class="inline-block px-3 py-1 mr-2 rounded-full text-sm bg-gray-700">{ &game.genre }</span>
                            <p class="mt-4 text-[var(--color-text-secondary)]">{ &game.description }</p>
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-semibold">{ format!("Discussions ({})", discussion.post_count()) }</h2>
                <button
                    class="px-4 py-2 text-white bg-[var(--color-primary)] hover:bg-[var(--color-primary-dark)] rounded-[var(--radius-button)]"
                    onclick={new_post}
                >
                    { "+ New Post" }
                </button>
            </div>

            {
                if discussion.posts.is_empty() {
                    html! {
                        <div class="p-6 bg-[var(--color-paper)] rounded-[var(--radius-card)]">
                            <p class="text-center text-[var(--color-text-secondary)]">
                                { "No discussions yet. Be the first to share your thoughts!" }
                            </p>
                        </div>
                    }
                } else {
                    discussion.posts.iter().map(|post| html! {
                        <PostCard key={post.id.value()} post={post.clone()} />
                    }).collect::<Html>()
                }
            }
        </main>
    }
}
