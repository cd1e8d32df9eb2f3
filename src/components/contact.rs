//! Contact section: the form with local validation and acknowledgement.

use leptos::prelude::*;

use crate::state::contact::{ContactFormState, Field};
use crate::util::notify::Notifier;

/// Contact form holding the page's only non-trivial state.
///
/// Input events overwrite single fields without validation; submitting
/// validates that all three fields are non-empty and reports the outcome
/// through the injected [`Notifier`]. A successful submit clears the form,
/// a failed one leaves the user's input intact.
#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let notifier = expect_context::<Notifier>();

    let on_name = move |ev| form.update(|s| s.update_field(Field::Name, event_target_value(&ev)));
    let on_email = move |ev| form.update(|s| s.update_field(Field::Email, event_target_value(&ev)));
    let on_message =
        move |ev| form.update(|s| s.update_field(Field::Message, event_target_value(&ev)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|state| match state.submit() {
            Ok(ack) => notifier.notify(&ack.notice()),
            Err(err) => notifier.notify(err.notice()),
        });
    };

    view! {
        <section id="contact" class="section">
            <div class="section__inner">
                <h2 class="section-title">"Contact Me"</h2>

                <form class="contact-form" on:submit=on_submit>
                    <div class="contact-form__field">
                        <label for="name" class="contact-form__label">
                            "Name"
                        </label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            class="form-input"
                            placeholder="Your name"
                            prop:value=move || form.get().name
                            on:input=on_name
                        />
                    </div>

                    <div class="contact-form__field">
                        <label for="email" class="contact-form__label">
                            "Email"
                        </label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            class="form-input"
                            placeholder="your.email@example.com"
                            prop:value=move || form.get().email
                            on:input=on_email
                        />
                    </div>

                    <div class="contact-form__field">
                        <label for="message" class="contact-form__label">
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            class="form-input contact-form__message"
                            placeholder="Your message..."
                            rows="5"
                            prop:value=move || form.get().message
                            on:input=on_message
                        ></textarea>
                    </div>

                    <button type="submit" class="btn-primary contact-form__submit">
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
