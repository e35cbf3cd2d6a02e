use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::nav::NAV_ITEMS;
use crate::content::{CONTACT_EMAIL, WHATSAPP_LINK};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="logo-text">{ "The Digital Front" }</span>
                    <p class="text-muted">{ "We build landing pages and web products that turn visitors into customers." }</p>
                </div>
                <div class="footer-links">
                    <h4>{ "Company" }</h4>
                    { for NAV_ITEMS.iter().filter(|item| item.section != "contact").map(|item| html! {
                        <a key={item.section} href={format!("#{}", item.section)}>{ item.name }</a>
                    }) }
                </div>
                <div class="footer-contact">
                    <h4>{ "Contact" }</h4>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                    <a href={WHATSAPP_LINK} target="_blank" rel="noopener noreferrer">{ "Chat on WhatsApp" }</a>
                    <a href="#contact" class="btn-primary">{ "Get in Touch" }</a>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{ format!("© {} The Digital Front. All rights reserved.", year) }</p>
            </div>
        </footer>
    }
}
