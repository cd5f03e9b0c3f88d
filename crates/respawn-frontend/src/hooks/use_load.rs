use std::fmt::Display;
use std::future::Future;

use futures::future::abortable;
use respawn::load::LoadState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Runs `load` whenever `deps` changes and tracks it as a [`LoadState`].
///
/// The in-flight future is aborted when the view unmounts or `deps` changes,
/// so a late response never writes into a view that is gone.
#[hook]
pub fn use_load<T, E, D, F, Fut>(deps: D, load: F) -> LoadState<T>
where
    T: Clone + 'static,
    E: Display + 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let state = use_state(LoadState::<T>::default);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            let machine = LoadState::Idle.start();
            state.set(machine.clone());

            let (task, handle) = abortable(load(deps.clone()));
            spawn_local(async move {
                // Err means the view was torn down first
                if let Ok(result) = task.await {
                    state.set(machine.finish(result));
                }
            });

            move || handle.abort()
        });
    }

    (*state).clone()
}
