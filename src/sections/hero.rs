use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::theme::use_theme;

#[function_component(Hero)]
pub fn hero() -> Html {
    let theme = use_theme();

    html! {
        <section id="hero" class={classes!("hero", theme.surface_class())}>
            <div class="hero-shapes">
                <div class="shape shape-purple"></div>
                <div class="shape shape-blue"></div>
                <div class="shape shape-orange"></div>
            </div>
            <RevealOnScroll class={classes!("container", "hero-content")}>
                <span class={classes!("section-badge", theme.badge_class())}>{ "Premier Landing Page Agency" }</span>
                <h1 class="headline hero-title">
                    { "Landing Pages That " }
                    <span class="text-primary">{ "Convert" }</span>
                </h1>
                <p class="hero-lede">
                    { "We design and develop stunning landing pages that convert visitors into customers, helping businesses scale and achieve their growth targets." }
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="btn-primary">{ "Get Started" }</a>
                    <a href="#case-studies" class="btn-secondary">{ "View Our Work" }</a>
                </div>
            </RevealOnScroll>
        </section>
    }
}
