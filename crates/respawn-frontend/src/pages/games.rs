use respawn::data::Game;
use respawn::load::load_games;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{GameCard, Spinner};
use crate::hooks::use_load;
use crate::providers::use_api;
use crate::routes::Route;

#[function_component(GamesPage)]
pub fn games_page() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let games = use_load((), move |_| async move { load_games(&*api).await });

    if games.is_pending() {
        return html! { <Spinner /> };
    }

    // A failed load was logged by the loader; the grid is simply left empty
    let games: &[Game] = games.ready().map(Vec::as_slice).unwrap_or_default();

    let on_select = Callback::from(move |game: Game| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Discussion { id: game.id });
        }
    });

    html! {
        <main class="container mx-auto px-4 mt-8 mb-8">
            <h1 class="text-3xl font-semibold mb-2">{ "Gaming Forum - Explore Games" }</h1>
            <p class="text-[var(--color-text-secondary)] mb-6">
                { "Discuss your favorite games and see community sentiment" }
            </p>

            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                {
                    games.iter().map(|game| html! {
                        <GameCard key={game.id.value()} game={game.clone()} on_select={on_select.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </main>
    }
}
