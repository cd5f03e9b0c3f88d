use respawn::data::Game;
use respawn::sentiment::SentimentBadge;
use yew::prelude::*;

use crate::components::GameSentiment;

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: Game,
    pub on_select: Callback<Game>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;
    let badge = SentimentBadge::for_game(game);

    let onclick = {
        let game = game.clone();
        props.on_select.reform(move |_: MouseEvent| game.clone())
    };

    html! {
        <div
            class="h-full flex flex-col cursor-pointer overflow-hidden bg-[var(--color-paper)] rounded-[var(--radius-card)] shadow transition-transform duration-200 hover:scale-[1.02]"
            {onclick}
        >
            <img class="h-[200px] w-full object-cover" src={game.image_url.clone()} alt={game.name.clone()} />
            <div class="flex-grow p-4">
                <h3 class="text-lg font-medium mb-2">{ &game.name }</h3>
                <span class="inline-block px-2 py-0.5 mb-2 rounded-full text-xs bg-gray-700">{ &game.genre }</span>
                <p class="text-sm text-[var(--color-text-secondary)] mb-4">{ &game.description }</p>

                <div class="flex items-center justify-between">
                    <GameSentiment {badge} />
                    <span class="text-xs text-[var(--color-text-secondary)]">
                        { format!("{} posts", game.post_count()) }
                    </span>
                </div>
            </div>
        </div>
    }
}
