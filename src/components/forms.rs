use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::task::{latency, CancelToken};

use crate::browser::delay::{simulate, token_of, use_task_guard};
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Submitting,
    Success(&'static str),
    Error(&'static str),
}

/// Show `outcome`, then fall back to idle after the reset delay.
async fn settle(token: &CancelToken, status: RwSignal<FormStatus>, outcome: FormStatus) {
    status.set(outcome);
    if simulate(token, latency::STATUS_RESET_MS).await.is_ok() {
        status.set(FormStatus::Idle);
    }
}

fn status_view(status: RwSignal<FormStatus>) -> impl IntoView {
    move || match status.get() {
        FormStatus::Success(msg) => Some(view! { <p class="form-status success" role="status">{msg}</p> }.into_any()),
        FormStatus::Error(msg) => Some(view! { <p class="form-status error" role="alert">{msg}</p> }.into_any()),
        FormStatus::Idle | FormStatus::Submitting => None,
    }
}

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let guard = use_task_guard();
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }
        let token = token_of(guard);
        let address = email.get_untracked();
        if !address.contains('@') {
            spawn_local(async move {
                settle(&token, status, FormStatus::Error("Please enter a valid email address")).await;
            });
            return;
        }
        status.set(FormStatus::Submitting);
        spawn_local(async move {
            if simulate(&token, latency::NEWSLETTER_MS).await.is_err() {
                return;
            }
            log::info!("Newsletter signup for {address}");
            email.set(String::new());
            settle(&token, status, FormStatus::Success("Thank you for subscribing!")).await;
        });
    };

    view! {
        <section class="newsletter">
            <h2>"Stay Connected"</h2>
            <p>"Receive sermons, devotionals and church news in your inbox"</p>
            <form class="newsletter-form" on:submit=on_submit>
                <input type="email" placeholder="Your email address" required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || status.get() == FormStatus::Submitting>
                    {move || if status.get() == FormStatus::Submitting { "Subscribing..." } else { "Subscribe" }}
                </button>
            </form>
            {status_view(status)}
        </section>
    }
}

#[derive(Clone, Default)]
struct ContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactMessage {
    fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message].iter().all(|f| !f.trim().is_empty())
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let guard = use_task_guard();
    let form = RwSignal::new(ContactMessage::default());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }
        let token = token_of(guard);
        if !form.with_untracked(|f| f.is_complete() && f.email.contains('@')) {
            spawn_local(async move {
                settle(&token, status, FormStatus::Error("Please fill in your name, a valid email and a message")).await;
            });
            return;
        }
        status.set(FormStatus::Submitting);
        spawn_local(async move {
            if simulate(&token, latency::CONTACT_MS).await.is_err() {
                return;
            }
            form.with_untracked(|f| log::info!("Contact message from {} <{}>: {}", f.name, f.email, f.subject));
            form.set(ContactMessage::default());
            settle(&token, status, FormStatus::Success("Thank you! Your message has been sent.")).await;
        });
    };

    let (email, phone) = state.config.with_value(|c| (c.contact_email.clone(), c.phone.clone()));

    view! {
        <section class="contact">
            <div class="contact-info">
                <h2>"Get in Touch"</h2>
                <p>"We would love to hear from you. Send us a message and we will respond as soon as possible."</p>
                <a href=format!("mailto:{email}")>{email.clone()}</a>
                <a href=format!("tel:{}", phone.replace(' ', ""))>{phone.clone()}</a>
            </div>
            <form class="contact-form" on:submit=on_submit>
                <input type="text" placeholder="Your name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input type="email" placeholder="Your email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input type="text" placeholder="Subject"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
                <textarea rows=6 placeholder="Your message"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || status.get() == FormStatus::Submitting>
                    {move || if status.get() == FormStatus::Submitting { "Sending..." } else { "Send Message" }}
                </button>
            </form>
            {status_view(status)}
        </section>
    }
}
