use respawn::async_callback;
use respawn::draft::{PostDraft, SubmitGate, submit_post};
use respawn::errors::DraftError;
use respawn::id::GameId;
use respawn::log::error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::use_api;
use crate::routes::{Route, after_post_created};

const INPUT_CLASSES: &str = "w-full px-3 py-2 bg-transparent border border-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-[var(--color-primary-light)] disabled:opacity-50";
const LABEL_CLASSES: &str = "block text-sm font-medium mb-1 mt-4";

#[derive(Properties, PartialEq)]
pub struct CreatePostProps {
    pub id: GameId,
}

fn input_setter(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            field.set(input.value());
        }
    })
}

#[function_component(CreatePostPage)]
pub fn create_post_page(props: &CreatePostProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let id = props.id;

    // Form state
    let username = use_state(String::new);
    let title = use_state(String::new);
    let content = use_state(String::new);

    // UI state
    let submitting = use_state(|| false);
    let gate = use_mut_ref(SubmitGate::default);
    let error_msg = use_state(|| None::<String>);

    let on_content_change = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    let submit: Callback<PostDraft> = async_callback!([
        api,
        navigator,
        gate,
        submitting,
        error_msg,
    ] |draft: PostDraft| {
        match submit_post(&*api, id, &draft).await {
            Ok(_) => {
                if let Some(navigator) = &navigator {
                    navigator.push(&after_post_created(id));
                }
            }
            Err(err) => {
                error!("Error creating post: {err}");
                error_msg.set(Some(err.user_message()));
                gate.borrow_mut().finish();
                submitting.set(false);
            }
        }
    });

    let on_submit = {
        let username = username.clone();
        let title = title.clone();
        let content = content.clone();
        let gate = gate.clone();
        let submitting = submitting.clone();
        let error_msg = error_msg.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Checked before yielding, so a second event in the same tick sees it
            if !gate.borrow().is_open() {
                return;
            }
            error_msg.set(None);

            let draft = PostDraft {
                username: (*username).clone(),
                title: (*title).clone(),
                content: (*content).clone(),
            };
            if !draft.is_complete() {
                error_msg.set(Some(DraftError::MissingFields.to_string()));
                return;
            }

            if !gate.borrow_mut().begin() {
                return;
            }
            submitting.set(true);
            submit.emit(draft);
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Discussion { id });
            }
        })
    };

    html! {
        <main class="container max-w-3xl mx-auto px-4 mt-8 mb-8">
            <h1 class="text-3xl font-semibold mb-4">{ "Create New Post" }</h1>

            <div class="p-6 bg-[var(--color-paper)] rounded-[var(--radius-card)]">
                <form onsubmit={on_submit}>
                    {
                        if let Some(error) = error_msg.as_ref() {
                            html! {
                                <div class="mb-2 p-3 bg-red-900/40 border border-red-700 rounded-md" role="alert">
                                    <p class="text-sm text-red-200">{ error }</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <label for="post-username" class={LABEL_CLASSES}>{ "Username *" }</label>
                    <input
                        id="post-username"
                        type="text"
                        class={INPUT_CLASSES}
                        value={(*username).clone()}
                        oninput={input_setter(&username)}
                        disabled={*submitting}
                    />

                    <label for="post-title" class={LABEL_CLASSES}>{ "Post Title *" }</label>
                    <input
                        id="post-title"
                        type="text"
                        class={INPUT_CLASSES}
                        value={(*title).clone()}
                        oninput={input_setter(&title)}
                        disabled={*submitting}
                    />

                    <label for="post-content" class={LABEL_CLASSES}>{ "Content *" }</label>
                    <textarea
                        id="post-content"
                        rows="6"
                        class={INPUT_CLASSES}
                        value={(*content).clone()}
                        oninput={on_content_change}
                        disabled={*submitting}
                    />
                    <p class="mt-1 text-xs text-[var(--color-text-secondary)]">
                        { "Share your thoughts about the game..." }
                    </p>

                    <div class="flex gap-4 mt-6">
                        <button
                            type="submit"
                            class="flex-1 px-4 py-2 text-white bg-[var(--color-primary)] hover:bg-[var(--color-primary-dark)] rounded-[var(--radius-button)] disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled={*submitting}
                        >
                            { if *submitting { "Posting..." } else { "Post" } }
                        </button>
                        <button
                            type="button"
                            class="flex-1 px-4 py-2 border border-[var(--color-primary-light)] text-[var(--color-primary-light)] rounded-[var(--radius-button)]"
                            onclick={on_cancel}
                        >
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        </main>
    }
}
