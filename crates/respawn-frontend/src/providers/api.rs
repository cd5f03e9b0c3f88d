use std::rc::Rc;

use respawn::client::{ForumApi, ForumClient};
use respawn::config::ForumConfig;
use yew::prelude::*;

/// Shared handle to the backend, provided once at the root.
#[derive(Clone)]
pub struct ApiContext {
    pub api: Rc<dyn ForumApi>,
}

impl ApiContext {
    pub fn new(config: &ForumConfig) -> Self {
        Self {
            api: Rc::new(ForumClient::new(config)),
        }
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub context: ApiContext,
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    html! {
        <ContextProvider<ApiContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}

#[hook]
pub fn use_api() -> Rc<dyn ForumApi> {
    use_context::<ApiContext>()
        .expect("use_api must be used within an ApiProvider")
        .api
}
