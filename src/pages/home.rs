use yew::prelude::*;

use crate::components::nav::Navbar;
use crate::components::notification::use_notifier;
use crate::contact::ContactSection;
use crate::sections::{
    case_studies::CaseStudies, footer::Footer, hero::Hero, integrations::Integrations,
    process::Process, services::Services, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    let notifier = use_notifier();

    html! {
        <div class="page">
            <Navbar />
            <Hero />
            <Services />
            <CaseStudies />
            <Process />
            <Integrations />
            <Testimonials />
            <ContactSection {notifier} />
            <Footer />
        </div>
    }
}
