//! Contact section: lead capture form with inline validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs write straight into `ContactState` through `set_field`; submit runs
//! `ContactState::submit`, which either fills the error map or resets the
//! form and sets the acknowledgment banner. Nothing leaves the browser.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactState, FormField, FormState, LicenseType};

/// Element id the hero call to action links to.
pub const CONTACT_SECTION_ID: &str = "contact";

#[component]
pub fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        contact.update(|c| {
            c.submit();
        });
    };

    view! {
        <section class="section contact" id=CONTACT_SECTION_ID>
            <div class="section__inner">
                <h2 class="section__title">"Contact Us"</h2>
                <Show when=move || contact.with(|c| c.acknowledgment.is_some())>
                    <p class="contact-form__ack" role="status">
                        {move || contact.with(|c| c.acknowledgment.clone().unwrap_or_default())}
                    </p>
                </Show>
                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <input
                        class="contact-form__input"
                        type="text"
                        placeholder="Name"
                        prop:value=field_value(contact, |f| &f.name)
                        on:input=move |ev| contact.update(|c| c.set_field(FormField::Name, event_target_value(&ev)))
                    />
                    <FieldError field=ContactField::Name/>

                    <input
                        class="contact-form__input"
                        type="email"
                        placeholder="Email"
                        prop:value=field_value(contact, |f| &f.email)
                        on:input=move |ev| contact.update(|c| c.set_field(FormField::Email, event_target_value(&ev)))
                    />
                    <FieldError field=ContactField::Email/>

                    <input
                        class="contact-form__input"
                        type="text"
                        placeholder="Company"
                        prop:value=field_value(contact, |f| &f.company)
                        on:input=move |ev| contact.update(|c| c.set_field(FormField::Company, event_target_value(&ev)))
                    />
                    <FieldError field=ContactField::Company/>

                    <select
                        class="contact-form__input"
                        prop:value=field_value(contact, |f| &f.license)
                        on:change=move |ev| contact.update(|c| c.set_field(FormField::License, event_target_value(&ev)))
                    >
                        <option value="">"Select License Type"</option>
                        {LicenseType::ALL
                            .into_iter()
                            .map(|license| view! { <option value=license.value()>{license.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <FieldError field=ContactField::License/>

                    <textarea
                        class="contact-form__input"
                        rows="4"
                        placeholder="Message"
                        prop:value=field_value(contact, |f| &f.message)
                        on:input=move |ev| contact.update(|c| c.set_field(FormField::Message, event_target_value(&ev)))
                    ></textarea>

                    <button class="btn btn--primary contact-form__submit" type="submit">
                        "Submit"
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Reactive getter for one form field, for `prop:value` bindings.
fn field_value(contact: RwSignal<ContactState>, read: fn(&FormState) -> &str) -> impl Fn() -> String + Copy {
    move || contact.with(|c| read(&c.form).to_owned())
}

/// Inline message under one field, present only while it has an error.
#[component]
fn FieldError(field: ContactField) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    move || {
        contact.with(|c| {
            c.error(field)
                .map(|msg| view! { <p class="contact-form__error">{msg.to_owned()}</p> })
        })
    }
}
