use std::rc::Rc;

use leptos::{prelude::*, task::spawn_local};

use crate::{
    contact::{
        ContactController, ContactForm, ContactMessage, DeliveryCallback, DeliveryError, Field,
        MessageTransport, SimulatedTransport,
    },
    content::{TransportKind, CONFIG, PROFILE},
    schedule::TaskScope,
};

use super::{platform::use_task_scope, SectionHeader};

#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    message
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::info!(
        from = %message.email,
        subject = %message.subject,
        "contact message received"
    );
    Ok(())
}

/// Delivers through [`send_contact_message`].
struct ServerTransport {
    scope: TaskScope,
}

impl MessageTransport for ServerTransport {
    fn deliver(&self, message: ContactMessage, done: DeliveryCallback) {
        let scope = self.scope.clone();
        spawn_local(async move {
            let result = send_contact_message(message)
                .await
                .map_err(|e| DeliveryError::new(e.to_string()));
            if let Err(e) = &result {
                log::error!("contact delivery failed: {}", e.reason);
            }
            if scope.is_alive() {
                done(result);
            }
        });
    }
}

fn transport(scope: &TaskScope) -> Rc<dyn MessageTransport> {
    match CONFIG.transport {
        TransportKind::Simulated => Rc::new(SimulatedTransport::new(scope, CONFIG.submit_delay())),
        TransportKind::Server => Rc::new(ServerTransport {
            scope: scope.clone(),
        }),
    }
}

type ControllerSlot = StoredValue<Option<ContactController>, LocalStorage>;

fn control(controller: ControllerSlot, action: impl FnOnce(&ContactController)) {
    controller.with_value(|c| {
        if let Some(c) = c {
            action(c);
        }
    });
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::new());
    let scope = use_task_scope();
    let controller: ControllerSlot = StoredValue::new_local(None);

    Effect::new(move |_| {
        let created = scope.with_value(|s| {
            ContactController::new(s, transport(s), CONFIG.status_clear(), move |f| {
                set_form.set(f.clone())
            })
        });
        controller.set_value(Some(created));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        control(controller, ContactController::submit);
    };

    view! {
        <section id="contact" class="py-24 bg-brightBlack/10">
            <div class="mx-auto px-4 max-w-6xl">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to say hello?"
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactInfo />
                    <form class="flex flex-col gap-4" on:submit=on_submit>
                        <div class="grid sm:grid-cols-2 gap-4">
                            <FormInput field=Field::Name label="Your Name" form=form controller=controller />
                            <FormInput field=Field::Email label="Your Email" form=form controller=controller />
                        </div>
                        <FormInput field=Field::Subject label="Subject" form=form controller=controller />
                        <label class="flex flex-col gap-2">
                            <span class="text-sm text-muted">"Message"</span>
                            <textarea
                                rows=6
                                class="bg-background border border-muted/30 rounded-md px-4 py-3 focus:border-yellow outline-none"
                                prop:value=move || form.with(|f| f.get(Field::Message).to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    control(controller, |c| c.input(Field::Message, value));
                                }
                            ></textarea>
                        </label>
                        {move || {
                            form.with(|f| {
                                f.status()
                                    .map(|status| {
                                        let class = if status.is_error() {
                                            "p-4 rounded-md bg-red/20 text-red border border-red/30"
                                        } else {
                                            "p-4 rounded-md bg-green/20 text-green border border-green/30"
                                        };
                                        view! { <div class=class role="status">{status.message()}</div> }
                                    })
                            })
                        }}
                        <button
                            type="submit"
                            class="bg-yellow/20 hover:bg-yellow/30 text-yellow px-6 py-3 rounded-md font-medium border border-yellow/30 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=move || form.with(ContactForm::is_submitting)
                        >
                            {move || {
                                if form.with(ContactForm::is_submitting) {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormInput(
    field: Field,
    label: &'static str,
    form: ReadSignal<ContactForm>,
    controller: ControllerSlot,
) -> impl IntoView {
    let kind = if field == Field::Email { "email" } else { "text" };

    view! {
        <label class="flex flex-col gap-2">
            <span class="text-sm text-muted">{label}</span>
            <input
                type=kind
                class="bg-background border border-muted/30 rounded-md px-4 py-3 focus:border-yellow outline-none"
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    control(controller, |c| c.input(field, value));
                }
            />
        </label>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <p class="text-lg leading-relaxed">{PROFILE.contact_blurb.clone()}</p>
            <div class="flex items-center gap-4">
                <i class="extra-mail text-yellow text-xl" />
                <a
                    href=format!("mailto:{}", PROFILE.email)
                    class="hover:text-yellow transition-colors duration-200"
                >
                    {PROFILE.email.clone()}
                </a>
            </div>
            <div class="flex items-center gap-4">
                <i class="extra-location text-yellow text-xl" />
                <span>{PROFILE.location.clone()}</span>
            </div>
            <div class="flex items-center gap-4">
                <i class="extra-school text-yellow text-xl" />
                <span>{PROFILE.institution.clone()}</span>
            </div>
            <SocialLinks />
        </div>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex gap-4">
            {PROFILE
                .socials
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href.clone()
                            title=social.title.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="h-10 w-10 flex items-center justify-center rounded-full border border-muted/30 hover:text-yellow hover:border-yellow transition-all duration-200"
                        >
                            <i class=social.icon.clone() />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
