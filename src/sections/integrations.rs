use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::components::section::SectionHeader;
use crate::content::INTEGRATIONS;

#[function_component(Integrations)]
pub fn integrations() -> Html {
    // Rendered twice so the CSS marquee can loop without a gap.
    let logos = INTEGRATIONS.iter().chain(INTEGRATIONS.iter()).enumerate();

    html! {
        <section id="integrations" class="section-padding">
            <div class="container">
                <RevealOnScroll>
                    <SectionHeader
                        badge="Integrations"
                        title="Seamless"
                        highlight="Connections"
                        subtitle="We integrate with the tools you already use, making your workflows smoother and more efficient."
                    />
                </RevealOnScroll>
                <div class="marquee" aria-label="Supported integrations">
                    <div class="marquee-track">
                        { for logos.map(|(i, integration)| html! {
                            <div key={i} class="integration-logo" aria-hidden={(i >= INTEGRATIONS.len()).to_string()}>
                                <img src={integration.logo} alt={integration.name} loading="lazy" />
                                <span>{ integration.name }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
