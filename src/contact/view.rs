use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::client::BasinClient;
use super::error::ContactError;
use super::form::{ContactForm, Field, Status};
use super::picker::CountryPicker;
use crate::components::notification::{Notifier, Toast};
use crate::components::reveal::RevealOnScroll;
use crate::components::section::SectionHeader;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub notifier: Notifier,
    #[prop_or_default]
    pub client: Option<BasinClient>,
}

pub enum ContactMsg {
    Update(Field, String),
    SelectCountry(String),
    Submit,
    Finished(Result<(), ContactError>),
    ResetElapsed,
}

pub struct ContactSection {
    form: ContactForm,
    client: BasinClient,
    // Dropping the handle cancels the pending reset.
    reset_timer: Option<Timeout>,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ContactSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
            client: ctx.props().client.clone().unwrap_or_default(),
            reset_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Update(field, value) => {
                self.form.update_field(field, value);
                true
            }
            ContactMsg::SelectCountry(code) => {
                self.form.update_field(Field::CountryCode, code);
                true
            }
            ContactMsg::Submit => {
                let payload = match self.form.begin_submission() {
                    Ok(payload) => payload,
                    Err(ContactError::Busy(status)) => {
                        warn!("Ignoring submit while {}", status);
                        return false;
                    }
                    Err(e) if e.is_validation() => {
                        warn!("Contact form rejected before sending: {}", e);
                        ctx.props()
                            .notifier
                            .emit(Toast::error("Please check the form", e.to_string()));
                        return true;
                    }
                    Err(e) => {
                        error!("Could not start submission: {}", e);
                        return false;
                    }
                };

                info!("Contact form submitting");
                let client = self.client.clone();
                ctx.link().send_future(async move {
                    ContactMsg::Finished(client.submit(&payload).await)
                });
                true
            }
            ContactMsg::Finished(outcome) => {
                let after = match self.form.on_outcome(&outcome) {
                    Ok(after) => after,
                    Err(e) => {
                        warn!("Dropping submission result: {}", e);
                        return false;
                    }
                };
                match &outcome {
                    Ok(()) => info!("Contact form sent"),
                    Err(e) => error!("Form submission error: {}", e),
                }
                ctx.props().notifier.emit(after.toast);
                self.reset_timer = after.reset_after_ms.map(|delay| {
                    let link = ctx.link().clone();
                    Timeout::new(delay, move || link.send_message(ContactMsg::ResetElapsed))
                });
                true
            }
            ContactMsg::ResetElapsed => {
                self.reset_timer = None;
                match self.form.reset() {
                    Ok(()) => {
                        info!("Contact form reset");
                        true
                    }
                    Err(e) => {
                        warn!("Skipping reset: {}", e);
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="contact" class="section-padding contact-section">
                <div class="container">
                    <RevealOnScroll>
                        <SectionHeader
                            badge="Contact Us"
                            title="Let's Create Something"
                            highlight="Amazing"
                            title_suffix="Together"
                            subtitle="Ready to transform your digital presence and boost your business? Get in touch with us today to discuss your project."
                        />
                    </RevealOnScroll>
                    <div class="contact-card">
                        <div class="contact-pitch">
                            <h2 class="headline">{ "Let's Work Together" }</h2>
                            <p>{ "Have a project in mind? We'd love to hear about it. Drop us a message and we'll get back to you as soon as possible." }</p>
                            <ul class="contact-points">
                                <li><h3>{ "Custom Development" }</h3><p>{ "Tailored solutions designed to meet your specific needs" }</p></li>
                                <li><h3>{ "Rapid Development" }</h3><p>{ "Quick turnaround times without compromising quality" }</p></li>
                                <li><h3>{ "Security First" }</h3><p>{ "Built with the latest security practices in mind" }</p></li>
                            </ul>
                        </div>
                        <div class="contact-form-panel">
                            <h2 class="headline">{ "Get in Touch" }</h2>
                            if self.form.status() == Status::Submitted {
                                <div class="contact-success">
                                    <h3>{ "Message Sent!" }</h3>
                                    <p>{ "Thank you for reaching out. We'll get back to you soon." }</p>
                                </div>
                            } else {
                                { self.render_form(ctx) }
                            }
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}

impl ContactSection {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let fields = self.form.fields();
        let busy = self.form.is_submit_disabled();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Update(field, input.value())
            })
        };
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Update(Field::Message, area.value())
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <div class="group">
                    <label for="name">{ "Your Name" }</label>
                    <input id="name" name="name" type="text" required=true
                        placeholder="John Doe"
                        value={fields.name.clone()}
                        oninput={input(Field::Name)} />
                </div>
                <div class="group">
                    <label for="email">{ "Email Address" }</label>
                    <input id="email" name="email" type="email" required=true
                        placeholder="example@domain.com"
                        value={fields.email.clone()}
                        oninput={input(Field::Email)} />
                </div>
                <div class="group">
                    <label for="company">{ "Company (Optional)" }</label>
                    <input id="company" name="company" type="text"
                        placeholder="Your Company"
                        value={fields.company.clone()}
                        oninput={input(Field::Company)} />
                </div>
                <div class="group">
                    <label for="phone">{ "Phone Number" }</label>
                    <div class="phone-row">
                        <CountryPicker
                            selected={fields.country_code.clone()}
                            on_select={link.callback(ContactMsg::SelectCountry)}
                            disabled={busy}
                        />
                        <input id="phone" name="phone" type="tel" required=true
                            placeholder="123 456 7890"
                            value={fields.phone.clone()}
                            oninput={input(Field::Phone)} />
                    </div>
                </div>
                <div class="group">
                    <label for="message">{ "Your Message" }</label>
                    <textarea id="message" name="message" rows="4" required=true
                        placeholder="Tell us about your project..."
                        value={fields.message.clone()}
                        oninput={on_message} />
                </div>
                <button type="submit" class={classes!("btn-primary", busy.then_some("is-busy"))} disabled={busy}>
                    { if busy { "Processing..." } else { "Let's Connect" } }
                </button>
            </form>
        }
    }
}
