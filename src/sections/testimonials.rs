use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::components::section::SectionHeader;
use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section-padding">
            <div class="container">
                <RevealOnScroll>
                    <SectionHeader
                        badge="Testimonials"
                        title="What Our"
                        highlight="Clients"
                        title_suffix="Say"
                        subtitle="Don't just take our word for it. Here's what our clients have to say about their experience working with us."
                    />
                </RevealOnScroll>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <RevealOnScroll key={t.name} class={classes!("testimonial-card")}>
                            <p class="testimonial-text">{ format!("\u{201c}{}\u{201d}", t.text) }</p>
                            <div class="testimonial-author">
                                <img src={t.image} alt={t.name} loading="lazy" />
                                <div>
                                    <div class="author-name">{ t.name }</div>
                                    <div class="author-role text-muted">{ format!("{}, {}", t.position, t.company) }</div>
                                </div>
                            </div>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}
