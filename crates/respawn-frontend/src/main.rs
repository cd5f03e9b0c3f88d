mod components;
mod hooks;
mod pages;
mod providers;
mod routes;

use respawn::config::ForumConfig;
use respawn::log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use components::Navbar;
use providers::{ApiContext, ApiProvider, ThemeProvider};
use routes::{Route, switch};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ForumConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api = use_memo(props.config.clone(), |config| ApiContext::new(config));

    html! {
        <ThemeProvider theme={props.config.theme.clone()}>
            <ApiProvider context={(*api).clone()}>
                <BrowserRouter>
                    <div class="min-h-screen bg-[var(--color-background)] text-[var(--color-text)] font-[family-name:var(--font-family)]">
                        <Navbar />
                        <Switch<Route> render={switch} />
                    </div>
                </BrowserRouter>
            </ApiProvider>
        </ThemeProvider>
    }
}

fn main() {
    respawn::log::setup().expect("Failed to setup logging");

    let config = ForumConfig::from_build_env();
    info!(api_base_url = %config.api_base_url, "starting respawn");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
