//! Contact Form Component
//!
//! Name/email/message fields with an inline acknowledgment. Nothing
//! is sent anywhere; submitting logs, acknowledges and resets.

use dioxus::prelude::*;

#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        tracing::info!(from = %name(), "Contact form submitted");
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        sent.set(true);
    };

    rsx! {
        form { id: "contactForm", class: "contact-form", onsubmit: submit,
            input {
                class: "contact-input",
                r#type: "text",
                placeholder: "Your name",
                required: true,
                value: "{name()}",
                oninput: move |e| {
                    name.set(e.value());
                    sent.set(false);
                },
            }
            input {
                class: "contact-input",
                r#type: "email",
                placeholder: "Your email",
                required: true,
                value: "{email()}",
                oninput: move |e| {
                    email.set(e.value());
                    sent.set(false);
                },
            }
            textarea {
                class: "contact-input",
                rows: "5",
                placeholder: "Your message",
                required: true,
                value: "{message()}",
                oninput: move |e| {
                    message.set(e.value());
                    sent.set(false);
                },
            }

            button { class: "btn btn-primary", r#type: "submit", "Send Message" }

            if sent() {
                p { class: "contact-ack", "Message sent successfully." }
            }
        }
    }
}
