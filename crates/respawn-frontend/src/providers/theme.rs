use respawn::theme::Theme;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub theme: Theme,
    pub children: Children,
}

/// Applies the start-up theme to `<html>` and exposes it read-only.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    use_effect_with(props.theme.clone(), |theme| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(html) = document.document_element() {
                html.class_list().add_1("dark").ok();
                html.set_attribute("style", &theme.style_attribute()).ok();
            }
        }
    });

    let context = ThemeContext {
        theme: props.theme.clone(),
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
