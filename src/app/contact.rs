use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{ContactError, ContactForm, ContactRelay, Field, FormDraft, SubmitOutcome};
use crate::content::{Icon, CONTACT, CONTACT_CHANNELS};
use crate::motion::stagger_delay;

use super::{Glyph, SectionHeading};

#[server]
pub async fn deliver_message(draft: FormDraft) -> Result<(), ServerFnError> {
    // never trust the browser's validation
    draft
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let email = draft.email.trim();
    tracing::info!(
        domain = crate::contact::email_domain(email).unwrap_or_default(),
        length = draft.message.trim().len(),
        "contact message received"
    );
    tracing::debug!(name = draft.name.trim(), email, "contact message sender");
    Ok(())
}

/// Hands drafts to [`deliver_message`].
struct ServerRelay;

impl ContactRelay for ServerRelay {
    async fn submit(&self, draft: &FormDraft) -> Result<(), ContactError> {
        deliver_message(draft.clone())
            .await
            .map_err(|e| ContactError::Relay(e.to_string()))
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let submitting = move || form.with(|f| f.is_submitting());

    let value_of = move |field: Field| move || form.with(|f| f.draft().get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                log::debug!("contact form rejected: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let res = ServerRelay.submit(&draft).await;
            if let Err(e) = &res {
                log::warn!("{e}");
            }
            form.update(|f| f.finish(res));
        });
    };

    view! {
        <section id=CONTACT class="section-padding relative overflow-hidden">
            <div class="absolute inset-0 bg-grid opacity-5"></div>
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeading
                    title="Get In"
                    accent="Touch"
                    subtitle="Ready to collaborate or need IT support? Let's connect and discuss how I can help with your technical challenges."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-semibold text-accent-400 mb-6 flex items-center">
                                <Glyph icon=Icon::MessageCircle class="mr-2" />
                                "Let's Connect"
                            </h3>
                            <p class="text-dark-300 mb-8 leading-relaxed">
                                "I'm always interested in new opportunities, challenging projects, and meaningful collaborations. Whether you need IT support, have a technical question, or want to discuss potential projects, I'd love to hear from you."
                            </p>
                        </div>
                        <ul class="space-y-4">
                            {CONTACT_CHANNELS
                                .iter()
                                .enumerate()
                                .map(|(i, channel)| {
                                    view! {
                                        <li class="reveal" style:animation-delay=stagger_delay(i, 0.1)>
                                            <a
                                                href=channel.href
                                                class="flex items-center gap-4 p-4 rounded-xl bg-dark-800/50 border border-dark-700 hover:border-accent-500/50 hover:translate-x-2 transition-all group"
                                            >
                                                <div class=format!(
                                                    "w-12 h-12 rounded-lg flex items-center justify-center bg-gradient-to-br {} group-hover:scale-110 transition-transform",
                                                    channel.color,
                                                )>
                                                    <Glyph icon=channel.icon class="text-white text-xl" />
                                                </div>
                                                <div>
                                                    <p class="text-dark-400 text-sm">{channel.label}</p>
                                                    <p class="text-dark-100 font-medium">{channel.value}</p>
                                                </div>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="p-6 rounded-xl bg-accent-500/5 border border-accent-500/20">
                            <div class="flex items-center gap-2 mb-2 text-accent-400 font-semibold">
                                <Glyph icon=Icon::Clock />
                                "Response Time"
                            </div>
                            <p class="text-dark-300 text-sm">
                                "I typically respond to messages within 24 hours. For urgent matters, please call directly."
                            </p>
                        </div>
                    </div>
                    <form class="space-y-6" on:submit=on_submit novalidate>
                        <div>
                            <label for="name" class="block text-dark-300 mb-2 font-medium">
                                "Name"
                            </label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                placeholder="Your full name"
                                class="form-input"
                                prop:value=value_of(Field::Name)
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.edit(Field::Name, event_target_value(&ev));
                                    })
                                }
                                disabled=submitting
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-dark-300 mb-2 font-medium">
                                "Email"
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                placeholder="your.email@example.com"
                                class="form-input"
                                prop:value=value_of(Field::Email)
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.edit(Field::Email, event_target_value(&ev));
                                    })
                                }
                                disabled=submitting
                            />
                        </div>
                        <div>
                            <label for="message" class="block text-dark-300 mb-2 font-medium">
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                required
                                placeholder="Tell me about your project or how I can help..."
                                class="form-input resize-none"
                                prop:value=value_of(Field::Message)
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.edit(Field::Message, event_target_value(&ev));
                                    })
                                }
                                disabled=submitting
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full flex items-center justify-center gap-2 py-4 rounded-lg bg-gradient-to-r from-accent-500 to-secondary-500 text-white font-semibold hover:scale-[1.02] transition-transform disabled:opacity-60 disabled:cursor-not-allowed"
                            disabled=submitting
                        >
                            {move || {
                                if submitting() {
                                    Either::Left(
                                        view! {
                                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                                            <span>"Sending..."</span>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <Glyph icon=Icon::Send />
                                            <span>"Send Message"</span>
                                        },
                                    )
                                }
                            }}
                        </button>
                        {move || {
                            form.with(|f| f.outcome().cloned())
                                .map(|outcome| match outcome {
                                    SubmitOutcome::Sent => {
                                        Either::Left(
                                            view! {
                                                <p class="text-green-400 text-sm text-center">
                                                    "Thanks! Your message has been sent."
                                                </p>
                                            },
                                        )
                                    }
                                    SubmitOutcome::Failed(e) => {
                                        Either::Right(
                                            view! {
                                                <p class="text-red-400 text-sm text-center">{e.to_string()}</p>
                                            },
                                        )
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}
