use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::contact::{self, Field, FieldError, SubmitPhase};

const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

fn field_style(errors: &[FieldError], field: Field) -> &'static str {
    if contact::error_for(errors, field).is_some() {
        "border-color: #1e40af; box-shadow: 0 0 0 3px rgba(220, 38, 38, 0.1);"
    } else {
        "border-color: #e5e7eb;"
    }
}

fn field_error(errors: &[FieldError], field: Field) -> Html {
    match contact::error_for(errors, field) {
        Some(message) => html! {
            <div class="error-message" style="color: #1e40af; font-size: 0.875rem; margin-top: 5px;">
                {message}
            </div>
        },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(Vec::<FieldError>::new);
    let phase = use_state(|| SubmitPhase::Idle);
    let toasts = use_state(|| 0u32);
    let show_toast = use_state(|| false);

    // Sending -> Sent -> Idle, clearing the form on the way back.
    {
        let phase_setter = phase.setter();
        let show_toast = show_toast.clone();
        let toasts = toasts.clone();
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        use_effect_with_deps(
            move |current: &SubmitPhase| {
                match current {
                    SubmitPhase::Sent => {
                        info!("Contact message accepted");
                        toasts.set(*toasts + 1);
                        show_toast.set(true);
                    }
                    SubmitPhase::Idle => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    SubmitPhase::Sending => {}
                }
                let timeout = current
                    .next()
                    .map(|(delay, next)| Timeout::new(delay, move || phase_setter.set(next)));
                move || drop(timeout)
            },
            *phase,
        );
    }

    let onsubmit = {
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        let errors = errors.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != SubmitPhase::Idle {
                return;
            }
            match contact::validate(&name, &email, &message) {
                Ok(_) => {
                    errors.set(Vec::new());
                    phase.set(SubmitPhase::Sending);
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_toast_done = {
        let show_toast = show_toast.clone();
        Callback::from(move |_| show_toast.set(false))
    };

    html! {
        <div class="contact-form">
            <form onsubmit={onsubmit} novalidate={true}>
                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Your Name"
                        value={(*name).clone()}
                        style={field_style(&errors, Field::Name)}
                        oninput={oninput_name}
                    />
                    {field_error(&errors, Field::Name)}
                </div>
                <div class="form-group">
                    <input
                        type="email"
                        placeholder="Your Email"
                        value={(*email).clone()}
                        style={field_style(&errors, Field::Email)}
                        oninput={oninput_email}
                    />
                    {field_error(&errors, Field::Email)}
                </div>
                <div class="form-group">
                    <textarea
                        rows="5"
                        placeholder="Your Message"
                        value={(*message).clone()}
                        style={field_style(&errors, Field::Message)}
                        oninput={oninput_message}
                    />
                    {field_error(&errors, Field::Message)}
                </div>
                <button
                    type="submit"
                    class="btn primary"
                    disabled={phase.disabled()}
                    style={phase.button_style()}
                >
                    {phase.label()}
                </button>
            </form>
            if *show_toast {
                <Toast key={*toasts} message={SUCCESS_MESSAGE} on_done={on_toast_done} />
            }
        </div>
    }
}
