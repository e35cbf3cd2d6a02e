use web_sys::window;
use yew::prelude::*;

const THEME_STORAGE_KEY: &str = "theme";

/// Application-wide look, handed down through context from `App`. The site
/// only ships the dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme;

impl Theme {
    pub fn site_default() -> Self {
        Theme
    }

    /// Root class on `<html>` and the value kept in localStorage.
    pub fn name(&self) -> &'static str {
        "dark"
    }

    pub fn badge_class(&self) -> &'static str {
        "badge-dark"
    }

    pub fn surface_class(&self) -> &'static str {
        "surface-dark"
    }
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

fn apply_to_document(theme: Theme) {
    let Some(window) = window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        if classes.add_1(theme.name()).is_err() {
            log::warn!("Could not update document theme class");
        }
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.name());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub theme: Theme,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    use_effect_with_deps(
        |theme: &Theme| {
            apply_to_document(*theme);
            || ()
        },
        props.theme,
    );

    html! {
        <ContextProvider<Theme> context={props.theme}>
            { props.children.clone() }
        </ContextProvider<Theme>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_default_is_dark() {
        let theme = Theme::site_default();
        assert_eq!(theme.name(), "dark");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn classes_use_dark_palette() {
        let theme = Theme::site_default();
        assert_eq!(theme.badge_class(), "badge-dark");
        assert_eq!(theme.surface_class(), "surface-dark");
    }
}
