//! Contact section: form fields, EmailJS submission, outcome toast.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_section::PageSection;
use crate::components::toast::Toaster;
use crate::content::{GITHUB_URL, OWNER_NAME};
use crate::state::contact::{ContactField, ContactState, field_group_class, focused_after_blur};
use crate::state::page::Section;
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};

#[component]
fn FormField(field: ContactField, contact: RwSignal<ContactState>) -> impl IntoView {
    let focused = RwSignal::new(false);
    let value = move || contact.with(|c| field.value(&c.form).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        contact.update(|c| field.set(&mut c.form, text));
    };
    let on_blur = move |_| focused.set(contact.with_untracked(|c| focused_after_blur(field.value(&c.form))));

    let input = if field == ContactField::Message {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                required=true
                prop:value=value
                on:input=on_input
                on:focus=move |_| focused.set(true)
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        let kind = if field == ContactField::Email { "email" } else { "text" };
        view! {
            <input
                id=field.id()
                name=field.id()
                type=kind
                required=true
                prop:value=value
                on:input=on_input
                on:focus=move |_| focused.set(true)
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class=move || field_group_class(focused.get())>
            <label for=field.id()>{field.label()}</label>
            {input}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let toaster = expect_context::<Toaster>();
    let form_node = NodeRef::<leptos::html::Form>::new();
    let revealed = use_reveal(form_node, RevealTarget::Element.threshold());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = contact.try_update(ContactState::begin_send).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let config = crate::net::emailjs::EmailConfig::from_build_env();
            let result = crate::net::emailjs::send_contact(&config, &form).await;
            if let Err(e) = &result {
                log::error!("contact form send failed: {e}");
            }
            let (kind, message) = crate::state::contact::outcome_toast(&result);
            contact.update(|c| c.finish_send(result.is_ok()));
            toaster.show(kind, message);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, toaster);
        }
    };

    view! {
        <PageSection section=Section::Contact class="section contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-container">
                <div class="contact-info">
                    <p>{format!("Have a project in mind or just want to say hello? Send {OWNER_NAME} a message.")}</p>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-github"></i>
                        " GitHub"
                    </a>
                </div>
                <form
                    node_ref=form_node
                    id="contact-form"
                    class=move || RevealEffect::FadeIn.class("contact-form", revealed.get())
                    on:submit=on_submit
                >
                    {ContactField::ALL
                        .into_iter()
                        .map(|field| view! { <FormField field=field contact=contact/> })
                        .collect_view()}
                    <button type="submit" class=move || contact.with(ContactState::submit_class)>
                        "Send Message"
                    </button>
                </form>
            </div>
        </PageSection>
    }
}
