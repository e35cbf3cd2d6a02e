use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::components::section::SectionHeader;
use crate::content::SERVICES;
use crate::theme::use_theme;

#[function_component(Services)]
pub fn services() -> Html {
    let theme = use_theme();

    html! {
        <section id="services" class="section-padding">
            <div class="container">
                <RevealOnScroll>
                    <SectionHeader
                        badge="Our Services"
                        title="Everything You Need for a"
                        highlight="Successful"
                        title_suffix="Landing Page"
                        subtitle="We offer comprehensive services to design, develop, and optimize high-converting landing pages."
                    />
                </RevealOnScroll>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <RevealOnScroll key={service.title} class={classes!("card", theme.surface_class())}>
                            <div class="card-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p class="text-muted">{ service.description }</p>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}
