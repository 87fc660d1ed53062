use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::ToastKind;
use crate::forms::{validate, validate_all, Field, FieldError, FormErrors};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Notification sink; the form fires one message per submit attempt.
    pub notify: Callback<(ToastKind, String)>,
}

fn error_text(error: Option<FieldError>) -> Html {
    match error {
        Some(error) => html! { <span class="error-text">{ error.to_string() }</span> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FormErrors::default);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let blur_handler = |field: Field, errors: &UseStateHandle<FormErrors>| {
        let errors = errors.clone();
        Callback::from(move |e: FocusEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = *errors;
            next.set(field, validate(field, &value).err());
            errors.set(next);
        })
    };
    let on_name_blur = blur_handler(Field::Name, &errors);
    let on_email_blur = blur_handler(Field::Email, &errors);
    let on_message_blur = blur_handler(Field::Message, &errors);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let errors = errors.clone();
        let notify = props.notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_value = name.trim().to_string();
            let email_value = email.trim().to_string();
            let message_value = message.trim().to_string();

            let result = validate_all(&name_value, &email_value, &message_value);
            if !result.is_clear() {
                log!("contact form rejected, keeping field errors visible");
                errors.set(result);
                notify.emit((
                    ToastKind::Error,
                    "Please fix the errors before submitting".to_string(),
                ));
                return;
            }

            notify.emit((
                ToastKind::Success,
                format!("Thanks {}! Your message has been sent.", name_value),
            ));
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            errors.set(FormErrors::default());
        })
    };

    html! {
        <section class="contact-section" id="contact">
            <h2>{"Tell me about your project"}</h2>
            <div class="underline"></div>

            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="form-row">
                    <div class="form-field">
                        <input
                            type="text"
                            id="name"
                            name="name"
                            placeholder="Name"
                            value={(*name).clone()}
                            oninput={on_name_input}
                            onblur={on_name_blur}
                        />
                        { error_text(errors.name) }
                    </div>
                    <div class="form-field">
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Email Address"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            onblur={on_email_blur}
                        />
                        { error_text(errors.email) }
                    </div>
                </div>

                <div>
                    <textarea
                        id="message"
                        name="message"
                        placeholder="Message description"
                        rows="5"
                        value={(*message).clone()}
                        oninput={on_message_input}
                        onblur={on_message_blur}
                    />
                    { error_text(errors.message) }
                </div>

                <button type="submit" class="btn-send">{"Send"}</button>
            </form>
        </section>
    }
}
