use codee::string::JsonSerdeCodec;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::storage::use_local_storage;

use crate::contact::{ContactDraft, ContactMessage, FormStatus};
use crate::profile::PROFILE;

const DRAFT_KEY: &str = "contact_draft";
const FIELD_CLASS: &str = "w-full px-4 py-3 bg-black/50 backdrop-blur-sm border border-gray-800 rounded-lg focus:outline-none focus:border-purple-600 transition-all hover:shadow-lg hover:shadow-purple-500/10";

/// Accept a message from the contact form.
///
/// Messages are validated again here and logged; nothing is stored or relayed.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    let msg = ContactMessage::new(&name, &email, &message);
    if let Err(e) = msg.validate() {
        tracing::warn!(error = %e, "rejected contact message");
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.set_status(http::StatusCode::UNPROCESSABLE_ENTITY);
        }
        return Err(ServerFnError::new(e));
    }
    tracing::info!(len = msg.message.len(), "contact message received");
    tracing::debug!(name = %msg.name, email = %msg.email, "contact message sender");
    Ok(())
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-gray-900 relative overflow-hidden">
            <div class="absolute inset-0 grid-background opacity-30" />
            <div class="container mx-auto px-4 relative">
                <h2 class="text-3xl font-bold mb-12 text-center">"Get In Touch"</h2>
                <div class="max-w-xl mx-auto">
                    <div class="flex justify-center gap-6 mb-8">
                        {PROFILE
                            .links
                            .iter()
                            .map(|link| {
                                let new_tab = link.opens_new_tab();
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target=new_tab.then_some("_blank")
                                        rel=new_tab.then_some("noopener noreferrer")
                                        aria-label=link.label.clone()
                                        class="text-gray-400 hover:text-purple-400 transition-all hover:scale-125 text-3xl"
                                    >
                                        <i class=link.kind.icon_class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

/// Next form status and, for a valid form that isn't already sending, the request to send.
fn submission(status: &FormStatus, draft: &ContactDraft) -> (FormStatus, Option<SendMessage>) {
    let msg = ContactMessage::from(draft);
    match status.on_submit(&msg) {
        Ok(next) => (
            next,
            Some(SendMessage {
                name: msg.name,
                email: msg.email,
                message: msg.message,
            }),
        ),
        Err(next) => (next, None),
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let (draft, set_draft, remove_draft) =
        use_local_storage::<ContactDraft, JsonSerdeCodec>(DRAFT_KEY);
    let (status, set_status) = signal(FormStatus::Idle);
    let send = ServerAction::<SendMessage>::new();

    Effect::new(move |_| {
        let res = if let Some(res) = send.value().get() {
            res
        } else {
            return;
        };
        let next = FormStatus::on_response(res);
        match &next {
            FormStatus::Sent => {
                log::debug!("contact message sent");
                set_draft.set(ContactDraft::default());
                remove_draft();
            }
            FormStatus::Failed(e) => log::warn!("contact message failed: {e}"),
            _ => {}
        }
        set_status.set(next);
    });

    let on_submit = move |ev: SubmitEvent| {
        // never let the browser navigate
        ev.prevent_default();
        let (next, request) = submission(&status.get_untracked(), &draft.get_untracked());
        set_status.set(next);
        if let Some(request) = request {
            send.dispatch(request);
        }
    };

    view! {
        <form class="space-y-4" novalidate=true on:submit=on_submit>
            <div>
                <input
                    type="text"
                    placeholder="Your Name"
                    class=FIELD_CLASS
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.name = value);
                    }
                />
            </div>
            <div>
                <input
                    type="email"
                    placeholder="Your Email"
                    class=FIELD_CLASS
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.email = value);
                    }
                />
            </div>
            <div>
                <textarea
                    placeholder="Your Message"
                    rows=4
                    class=FIELD_CLASS
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| d.message = value);
                    }
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=move || status.with(FormStatus::is_sending)
                class="w-full bg-purple-600 hover:bg-purple-700 disabled:opacity-50 text-white px-6 py-3 rounded-lg transition-all hover:scale-105 hover:shadow-lg hover:shadow-purple-500/20"
            >
                {move || if status.with(FormStatus::is_sending) { "Sending..." } else { "Send Message" }}
            </button>
            {move || {
                let status = status.get();
                status
                    .text()
                    .map(|s| {
                        view! {
                            <p
                                role="status"
                                class=if status.is_err() { "text-red-400" } else { "text-green-400" }
                            >
                                {s}
                            </p>
                        }
                    })
            }}
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_sends_once() {
        let form = draft(" Ada ", "ada@example.com", "Hello");
        let mut status = FormStatus::Idle;
        let mut sent = Vec::new();

        // a double click submits twice before the response arrives
        for _ in 0..2 {
            let (next, request) = submission(&status, &form);
            status = next;
            sent.extend(request);
        }

        assert_eq!(status, FormStatus::Sending);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");
        assert_eq!(sent[0].email, "ada@example.com");
        assert_eq!(sent[0].message, "Hello");
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let (status, request) = submission(&FormStatus::Idle, &draft("Ada", "nope", "Hello"));
        assert!(request.is_none());
        assert_eq!(
            status,
            FormStatus::Invalid("That doesn't look like an email address".to_string())
        );

        let (status, request) = submission(&FormStatus::Idle, &ContactDraft::default());
        assert!(request.is_none());
        assert!(status.is_err());
    }

    #[test]
    fn test_resend_after_failure() {
        let failed = FormStatus::Failed("offline".to_string());
        let (status, request) = submission(&failed, &draft("Ada", "ada@example.com", "Hi"));
        assert_eq!(status, FormStatus::Sending);
        assert!(request.is_some());
    }
}
