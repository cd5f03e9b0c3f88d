use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::use_theme;
use crate::routes::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator();
    let theme = use_theme().theme;

    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Games);
        }
    });

    html! {
        <header
            class="sticky top-0 z-10 shadow-md"
            style={format!("background-color: {};", theme.palette.primary)}
        >
            <nav class="container mx-auto px-4 h-16 flex items-center">
                <span class="text-2xl mr-4">{ "🎮" }</span>
                <h1
                    class="flex-grow text-xl font-medium text-white cursor-pointer"
                    onclick={go_home.clone()}
                >
                    { "Gaming Forum - Sentiment Analysis" }
                </h1>
                <button
                    class="px-4 py-2 text-white hover:bg-white/10 rounded-lg transition-colors"
                    onclick={go_home}
                >
                    { "Games" }
                </button>
            </nav>
        </header>
    }
}
