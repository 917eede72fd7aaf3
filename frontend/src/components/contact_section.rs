use shared::{ContactCopy, ContactError, ContactSubmission, Section};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub copy: ContactCopy,
    /// Hands the submission to whatever backend the page was given
    pub on_submit: Callback<ContactSubmission, Result<(), ContactError>>,
}

fn status_message(outcome: &Result<(), ContactError>) -> (&'static str, String) {
    match outcome {
        Ok(()) => ("form-message success", "Thanks! Your message has been sent.".to_string()),
        Err(ContactError::MissingField(field)) => ("form-message error", format!("Please fill in your {}.", field)),
        Err(ContactError::BackendUnavailable) => (
            "form-message info",
            "Message delivery isn't set up yet. Please reach out through one of the links below.".to_string(),
        ),
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let outcome = use_state(|| Option::<Result<(), ContactError>>::None);

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
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let outcome = outcome.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = ContactSubmission::new(&name, &email, &message);
            let result = submission.check_required().and_then(|_| on_submit.emit(submission));
            if result.is_ok() {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            outcome.set(Some(result));
        })
    };

    html! {
        <section id={Section::Contact.id()} class="section">
            <h2 class="section-title">{"Contact Me"}</h2>
            <article class="card contact-card">
                <header class="card-header">
                    <h3 class="card-title">{ &props.copy.title }</h3>
                    <p class="card-description">{ &props.copy.description }</p>
                </header>
                <div class="card-content">
                    {if let Some(result) = (*outcome).as_ref() {
                        let (class, text) = status_message(result);
                        html! { <div class={class}>{ text }</div> }
                    } else { html! {} }}

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="name">{"Name"}</label>
                                <input
                                    id="name"
                                    class="input"
                                    type="text"
                                    placeholder="Your name"
                                    value={(*name).clone()}
                                    oninput={on_name_input}
                                />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email"}</label>
                                <input
                                    id="email"
                                    class="input"
                                    type="email"
                                    placeholder="Your email"
                                    value={(*email).clone()}
                                    oninput={on_email_input}
                                />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                class="input"
                                placeholder="Your message"
                                rows="4"
                                value={(*message).clone()}
                                oninput={on_message_input}
                            />
                        </div>
                        <button type="submit" class="button">{"Send Message"}</button>
                    </form>
                </div>
            </article>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn test_status_messages() {
        let (class, text) = status_message(&Err(ContactError::BackendUnavailable));
        assert_eq!(class, "form-message info");
        assert!(text.starts_with("Message delivery"));

        let (class, text) = status_message(&Err(ContactError::MissingField("email")));
        assert_eq!(class, "form-message error");
        assert_eq!(text, "Please fill in your email.");

        assert_eq!(status_message(&Ok(())).0, "form-message success");
    }

    #[tokio::test]
    async fn test_renders_three_fields_and_no_status() {
        let html = ServerRenderer::<ContactSection>::with_props(|| ContactSectionProps {
            copy: ContactCopy::default(),
            on_submit: Callback::from(|_: ContactSubmission| Err(ContactError::BackendUnavailable)),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"id="name""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"id="message""#));
        assert!(html.contains("Send Message"));
        assert!(html.contains("Get in Touch"));
        assert!(!html.contains("form-message"));
    }
}
