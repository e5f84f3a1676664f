//! Contact Form Component
//!
//! Name, email and message, all required. Stores a `messages` document with a
//! server timestamp and shows the outcome under the form.

use folio_core::domain::{Message, MessageDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::Notice;

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = MessageDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            set_notice.set(Some(Notice::Error(e.to_string())));
            return;
        }

        set_sending.set(true);
        spawn_local(async move {
            let result = ctx.repo::<Message>().create(draft).await;
            if result.is_ok() {
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            set_notice.set(Some(Notice::from_result(&result, "Message sent successfully!")));
            set_sending.set(false);
        });
    };

    view! {
        <form id="contact-form" class="contact-form" on:submit=submit>
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <textarea
                name="message"
                rows="5"
                placeholder="Your Message"
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
            {move || notice.get().map(|n| view! { <p class=n.class()>{n.text().to_string()}</p> })}
        </form>
    }
}
