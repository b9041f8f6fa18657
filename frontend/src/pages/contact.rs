use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::config;
use crate::contact::{ContactError, ContactField, ContactPayload, Submitter};
use crate::content::company::{CONTACT_CHANNELS, MAP_IMAGE, OFFICE_HOURS, SOCIAL_LINKS};

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// First message to show under `field`, if any.
fn error_for(errors: &[ContactError], field: ContactField) -> Option<String> {
    errors.iter().find(|err| err.field() == field).map(ToString::to_string)
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub submitter: Submitter,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_state(ContactPayload::default);
    let errors = use_state(Vec::<ContactError>::new);
    let status = use_state_eq(|| FormStatus::Idle);

    {
        // Clear the form a while after a successful send. Leaving the page
        // drops the timer.
        let form = form.clone();
        let status_handle = status.clone();
        use_effect_with_deps(
            move |status: &FormStatus| {
                let timer = (*status == FormStatus::Sent).then(|| {
                    Timeout::new(config::CONTACT_RESET_MS, move || {
                        form.set(ContactPayload::default());
                        status_handle.set(FormStatus::Idle);
                    })
                });
                move || drop(timer)
            },
            (*status).clone(),
        );
    }

    let on_field = |field: ContactField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.iter().any(|err| err.field() == field) {
                errors.set(errors.iter().filter(|err| err.field() != field).cloned().collect());
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let submitter = props.submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }
            if let Err(problems) = form.validate() {
                log::debug!("contact form rejected with {} problem(s)", problems.len());
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            status.set(FormStatus::Sending);

            let payload = form.trimmed();
            let submitter = submitter.clone();
            let status = status.clone();
            spawn_local(async move {
                match submitter.0.submit(payload).await {
                    Ok(()) => status.set(FormStatus::Sent),
                    Err(err) => {
                        log::error!("contact submission failed: {err}");
                        status.set(FormStatus::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let field_error = |field: ContactField| -> Html {
        match error_for(&errors, field) {
            Some(message) => html! { <p class="field-error">{ message }</p> },
            None => html! {},
        }
    };
    let invalid = |field: ContactField| error_for(&errors, field).is_some().then_some("invalid");
    let sending = *status == FormStatus::Sending;

    html! {
        <div class="page contact-page">
            <div class="container">
                <Reveal class={classes!("page-header")} from={RevealFrom::Down} on_mount={true}>
                    <h1>{"Get in "}<span class="accent">{"Touch"}</span></h1>
                    <p>
                        {"Have a project in mind? Let's discuss how we can help bring your vision to life. \
                          We're here to answer your questions and start your journey to success."}
                    </p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal from={RevealFrom::Left} on_mount={true} delay_ms={200}>
                        <div class="card contact-form-panel">
                            <h2>{"Send us a Message"}</h2>
                            {
                                match &*status {
                                    FormStatus::Sent => html! {
                                        <div class="form-banner success">
                                            {"Thank you! Your message has been sent successfully."}
                                        </div>
                                    },
                                    FormStatus::Failed(reason) => html! {
                                        <div class="form-banner failure">{ reason }</div>
                                    },
                                    _ => html! {},
                                }
                            }
                            <form onsubmit={onsubmit} novalidate={true}>
                                <div class="form-field">
                                    <label for="name">{"Name"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        class={classes!(invalid(ContactField::Name))}
                                        value={form.name.clone()}
                                        oninput={on_field(ContactField::Name)}
                                        placeholder="Your Name"
                                    />
                                    { field_error(ContactField::Name) }
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        class={classes!(invalid(ContactField::Email))}
                                        value={form.email.clone()}
                                        oninput={on_field(ContactField::Email)}
                                        placeholder="your.email@example.com"
                                    />
                                    { field_error(ContactField::Email) }
                                </div>
                                <div class="form-field">
                                    <label for="message">{"Message"}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        class={classes!(invalid(ContactField::Message))}
                                        value={form.message.clone()}
                                        oninput={on_field(ContactField::Message)}
                                        placeholder="Tell us about your project..."
                                    />
                                    { field_error(ContactField::Message) }
                                </div>
                                <button type="submit" class="btn-primary submit-button" disabled={sending}>
                                    { if sending { "Sending..." } else { "Send Message" } }
                                </button>
                            </form>
                        </div>
                    </Reveal>

                    <Reveal class={classes!("contact-side")} from={RevealFrom::Right} on_mount={true} delay_ms={400}>
                        { for CONTACT_CHANNELS.iter().enumerate().map(|(index, channel)| html! {
                            <Reveal class={classes!("card", "channel-card")} on_mount={true} delay_ms={stagger_delay(index, 100, 500)}>
                                <div class="icon-badge">{ channel.icon }</div>
                                <div>
                                    <h3>{ channel.title }</h3>
                                    {
                                        match channel.link {
                                            Some(link) => html! { <a href={link}>{ channel.content }</a> },
                                            None => html! { <p>{ channel.content }</p> },
                                        }
                                    }
                                </div>
                            </Reveal>
                        }) }

                        <div class="cta-panel socials-panel">
                            <h3>{"Connect With Us"}</h3>
                            <div class="social-row">
                                { for SOCIAL_LINKS.iter().map(|social| html! {
                                    <a href={social.url} target="_blank" rel="noopener noreferrer" title={social.name}>
                                        { social.icon }
                                    </a>
                                }) }
                            </div>
                        </div>

                        <div class="map-card">
                            <img src={MAP_IMAGE} alt="Bengaluru Office" />
                            <div class="map-caption">
                                <h4>{"Visit Our Office"}</h4>
                                <p>{"Bengaluru, India"}</p>
                            </div>
                        </div>
                    </Reveal>
                </div>

                <Reveal class={classes!("hours-grid")}>
                    { for OFFICE_HOURS.iter().map(|slot| html! {
                        <div class="card hours-card">
                            <h3>{ slot.days }</h3>
                            <p>{ slot.hours }</p>
                        </div>
                    }) }
                </Reveal>
            </div>
            <style>
                {r#"
                    .contact-page {
                        position: relative;
                        z-index: 1;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-form-panel {
                        padding: 2rem;
                    }
                    .contact-form-panel h2 {
                        font-size: 1.875rem;
                        margin: 0 0 1.5rem;
                    }
                    .form-banner {
                        margin-bottom: 1.5rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                    }
                    .form-banner.success {
                        background: rgba(34, 197, 94, 0.1);
                        border: 1px solid rgba(34, 197, 94, 0.5);
                        color: #22c55e;
                    }
                    .form-banner.failure {
                        background: rgba(239, 68, 68, 0.1);
                        border: 1px solid rgba(239, 68, 68, 0.5);
                        color: #ef4444;
                    }
                    .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        color: var(--text-secondary);
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: var(--bg-secondary);
                        border: 1px solid var(--border-color);
                        border-radius: 0.5rem;
                        color: var(--text-primary);
                        font: inherit;
                        transition: border-color 0.3s ease;
                    }
                    .form-field textarea {
                        resize: none;
                    }
                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: var(--primary);
                    }
                    .form-field .invalid {
                        border-color: #ef4444;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin: 0.4rem 0 0;
                    }
                    .submit-button {
                        width: 100%;
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .contact-side {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .channel-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.5rem;
                    }
                    .channel-card h3 {
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem;
                    }
                    .channel-card a,
                    .channel-card p {
                        color: var(--text-tertiary);
                        margin: 0;
                        transition: color 0.3s ease;
                    }
                    .channel-card a:hover {
                        color: var(--primary);
                    }
                    .socials-panel {
                        padding: 2rem;
                        text-align: left;
                    }
                    .socials-panel h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1.5rem;
                    }
                    .social-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-row a {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--bg-secondary);
                        border: 1px solid var(--border-color);
                        border-radius: 0.5rem;
                        color: var(--text-tertiary);
                        font-size: 1.25rem;
                        transition: color 0.3s ease, border-color 0.3s ease, transform 0.3s ease;
                    }
                    .social-row a:hover {
                        color: var(--primary);
                        border-color: var(--primary);
                        transform: scale(1.1);
                    }
                    .map-card {
                        position: relative;
                        height: 16rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid var(--border-color);
                    }
                    .map-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .map-caption {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                        background: linear-gradient(to top, var(--bg-primary), transparent);
                    }
                    .map-caption h4 {
                        font-size: 1.25rem;
                        margin: 0;
                    }
                    .map-caption p {
                        color: var(--text-secondary);
                        margin: 0.25rem 0 0;
                    }
                    .hours-grid {
                        margin-top: 4rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .hours-card {
                        text-align: center;
                        padding: 1.5rem;
                    }
                    .hours-card h3 {
                        color: var(--primary);
                        margin: 0 0 0.5rem;
                    }
                    .hours-card p {
                        color: var(--text-tertiary);
                        margin: 0;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .hours-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_looked_up_by_field() {
        let errors = vec![ContactError::Missing(ContactField::Name), ContactError::InvalidEmail];
        assert_eq!(error_for(&errors, ContactField::Name).as_deref(), Some("Name is required"));
        assert_eq!(
            error_for(&errors, ContactField::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(error_for(&errors, ContactField::Message), None);
    }
}
