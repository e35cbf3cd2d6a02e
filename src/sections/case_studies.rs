use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::components::section::SectionHeader;
use crate::content::{filter_case_studies, ALL_CATEGORIES, CASE_STUDY_CATEGORIES};

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let category = use_state(|| ALL_CATEGORIES);
    let projects = filter_case_studies(*category);

    html! {
        <section id="case-studies" class="section-padding">
            <div class="container">
                <RevealOnScroll>
                    <SectionHeader
                        badge="Our Work"
                        title="Results That"
                        highlight="Speak"
                        title_suffix="for Themselves"
                        subtitle="Take a look at some of our recent projects and the impressive results we've achieved for our clients."
                    />
                </RevealOnScroll>
                <div class="category-filter">
                    { for CASE_STUDY_CATEGORIES.iter().map(|&name| {
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| category.set(name))
                        };
                        html! {
                            <button key={name} class={classes!("filter-chip", (*category == name).then_some("active"))} {onclick}>
                                { name }
                            </button>
                        }
                    }) }
                </div>
                <div class="card-grid">
                    { for projects.iter().map(|project| html! {
                        <div key={project.title} class="case-card">
                            <div class="case-image">
                                <img src={project.image} alt={project.title} loading="lazy" />
                                <span class="case-category">{ project.category }</span>
                            </div>
                            <div class="case-body">
                                <h3>{ project.title }</h3>
                                <p class="text-muted">{ project.description }</p>
                                <div class="case-metric">
                                    <span class="metric-value">{ project.conversion_increase }</span>
                                    <span class="metric-label">{ "Conversion Increase" }</span>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="section-cta">
                    <a href="#contact" class="btn-primary">{ "Start Your Project" }</a>
                </div>
            </div>
        </section>
    }
}
