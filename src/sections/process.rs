use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::components::section::SectionHeader;
use crate::content::PROCESS_STEPS;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="section-padding">
            <div class="container">
                <RevealOnScroll>
                    <SectionHeader
                        badge="Our Process"
                        title="How We"
                        highlight="Deliver"
                        title_suffix="Results"
                        subtitle="Our proven six-step process ensures that we create landing pages that not only look great but also convert visitors into customers."
                    />
                </RevealOnScroll>
                <ol class="process-steps">
                    { for PROCESS_STEPS.iter().map(|step| html! {
                        <li key={step.number}>
                            <RevealOnScroll class={classes!("process-step")}>
                                <span class="step-number">{ step.number }</span>
                                <h3>{ step.title }</h3>
                                <p class="text-muted">{ step.description }</p>
                            </RevealOnScroll>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}
