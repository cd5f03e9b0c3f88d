use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="container mx-auto px-4 mt-16 text-center">
            <h1 class="text-3xl font-semibold mb-4">{ "404 Not Found" }</h1>
            <Link<Route> to={Route::Games} classes="text-[var(--color-primary-light)] underline">
                { "Back to games" }
            </Link<Route>>
        </main>
    }
}
