use leptos::prelude::*;

use crate::contact::{ContactFields, ContactForm, ContactMessage, Field, SubmitStatus};
use crate::content::PROFILE;
use crate::site::ACCENT;

const INPUT: &str = "p-4 rounded-xl backdrop-blur-lg bg-white bg-opacity-5 border border-opacity-10 focus:border-opacity-40 transition-all focus:scale-105";
const CONTACT_LINK: &str =
    "flex items-center gap-3 p-3 rounded-lg hover:bg-white hover:bg-opacity-5 transition-colors";

#[server]
pub async fn send_contact_message(fields: ContactFields) -> Result<(), ServerFnError> {
    use crate::email::{deliver_with, EmailJsClient};

    let client = use_context::<EmailJsClient>();
    match deliver_with(client.as_ref(), &fields).await {
        Ok(()) => {
            tracing::info!("contact message delivered");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact message failed");
            Err(ServerFnError::new(e.visitor_message()))
        }
    }
}

fn failure_text(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(s) => s.clone(),
        _ => "Couldn't reach the server, please try again.".to_string(),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let send = Action::new(|msg: &ContactMessage| {
        let msg = msg.clone();
        async move { send_contact_message(ContactFields::from(msg)).await }
    });

    Effect::new(move |_| {
        if let Some(res) = send.value().get() {
            if let Err(e) = &res {
                log::warn!("contact form delivery failed: {e}");
            }
            form.update(|f| f.finish(res.map_err(|e| failure_text(&e))));
        }
    });

    let field_value = move |field: Field| {
        move || {
            form.with(|f| {
                let fields = f.fields();
                match field {
                    Field::Name => fields.name.clone(),
                    Field::Email => fields.email.clone(),
                    Field::Message => fields.message.clone(),
                }
            })
        }
    };

    view! {
        <section id="contact" class="py-20">
            <div class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Let's Work Together"</h2>
                <p class="text-lg opacity-70 max-w-2xl mx-auto">
                    "Have a project in mind? I'd love to hear about it"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div class="space-y-6">
                    <div class="p-6 rounded-2xl backdrop-blur-lg bg-white bg-opacity-5 border border-opacity-10">
                        <h3 class="font-semibold text-lg mb-4">"Get in touch"</h3>
                        <div class="space-y-4">
                            <a href=format!("mailto:{}", PROFILE.email) class=CONTACT_LINK>
                                <span class="text-xl">"✉"</span>
                                <div>
                                    <div class="font-medium">"Email"</div>
                                    <div class="opacity-80">{PROFILE.email}</div>
                                </div>
                            </a>
                            <a href=PROFILE.github target="_blank" rel="noreferrer" class=CONTACT_LINK>
                                <i class="devicon-github-plain text-xl" />
                                <div>
                                    <div class="font-medium">"GitHub"</div>
                                    <div class="opacity-80">{format!("@{}", PROFILE.github_handle())}</div>
                                </div>
                            </a>
                            <a href=PROFILE.linkedin target="_blank" rel="noreferrer" class=CONTACT_LINK>
                                <i class="devicon-linkedin-plain text-xl" />
                                <div>
                                    <div class="font-medium">"LinkedIn"</div>
                                    <div class="opacity-80">"Connect professionally"</div>
                                </div>
                            </a>
                        </div>
                    </div>
                </div>

                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        match form.try_update(ContactForm::begin_submit) {
                            Some(Ok(msg)) => {
                                send.dispatch(msg);
                            }
                            Some(Err(e)) => log::debug!("contact form not sent: {e}"),
                            None => {}
                        }
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <input
                            type="text"
                            placeholder="Your name"
                            class=INPUT
                            required
                            prop:value=field_value(Field::Name)
                            on:input=move |ev| form.update(|f| f.set(Field::Name, event_target_value(&ev)))
                        />
                        <input
                            type="email"
                            placeholder="Your email"
                            class=INPUT
                            required
                            prop:value=field_value(Field::Email)
                            on:input=move |ev| form.update(|f| f.set(Field::Email, event_target_value(&ev)))
                        />
                    </div>
                    <textarea
                        placeholder="Your message"
                        rows=6
                        class=format!("{INPUT} w-full")
                        required
                        prop:value=field_value(Field::Message)
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full py-4 rounded-xl font-semibold text-white transition-all duration-200 hover:scale-105 hover:shadow-xl disabled:opacity-60 disabled:hover:scale-100"
                        style:background=ACCENT
                        disabled=move || form.with(ContactForm::is_sending)
                    >
                        {move || {
                            if form.with(ContactForm::is_sending) { "Sending..." } else { "Send Message" }
                        }}
                    </button>
                    <SubmitNotice status=Signal::derive(move || form.with(|f| f.status().clone())) />
                </form>
            </div>
        </section>
    }
}

#[component]
fn SubmitNotice(status: Signal<SubmitStatus>) -> impl IntoView {
    move || match status.get() {
        SubmitStatus::Idle | SubmitStatus::Sending => None,
        SubmitStatus::Sent => Some(
            view! {
                <p class="text-center text-green-400" role="status">
                    "Thanks! Your message has been sent."
                </p>
            }
            .into_any(),
        ),
        SubmitStatus::Failed(reason) => Some(
            view! {
                <p class="text-center text-red-400" role="alert">
                    {reason}
                </p>
            }
            .into_any(),
        ),
    }
}
