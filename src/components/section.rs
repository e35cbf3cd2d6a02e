use yew::prelude::*;

use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    pub highlight: AttrValue,
    #[prop_or_default]
    pub title_suffix: Option<AttrValue>,
    pub subtitle: AttrValue,
}

/// Badge, headline with one highlighted word, and a short lede. Shared by
/// every section on the page.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let theme = use_theme();

    html! {
        <div class="section-header">
            <span class={classes!("section-badge", theme.badge_class())}>{ &props.badge }</span>
            <h2 class="headline">
                { &props.title }{ " " }
                <span class="text-primary">{ &props.highlight }</span>
                if let Some(suffix) = &props.title_suffix {
                    { " " }{ suffix }
                }
            </h2>
            <p class="text-muted">{ &props.subtitle }</p>
        </div>
    }
}
