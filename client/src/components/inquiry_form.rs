//! Contact form stub shared by the home contact section and the contact
//! page. Submitting validates locally and shows an acknowledgement; nothing
//! leaves the browser.

#[cfg(test)]
#[path = "inquiry_form_test.rs"]
mod inquiry_form_test;

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactForm, ContactStatus};

/// Per-field placeholder copy.
#[derive(Clone, Copy)]
pub struct Placeholders {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub message: &'static str,
}

impl Placeholders {
    fn for_field(&self, field: ContactField) -> &'static str {
        match field {
            ContactField::Name => self.name,
            ContactField::Phone => self.phone,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }
}

#[component]
pub fn InquiryForm(
    title: &'static str,
    subtitle: &'static str,
    submit_label: &'static str,
    placeholders: Placeholders,
) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let field = move |field: ContactField| {
        let input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
        let class = move || field_class(form.with(|f| f.is_invalid(field)));
        let value = move || form.with(|f| f.get(field).to_owned());
        let control = if field == ContactField::Message {
            view! {
                <textarea rows="5" placeholder=placeholders.for_field(field) prop:value=value on:input=input></textarea>
            }
            .into_any()
        } else {
            let kind = if field == ContactField::Email { "email" } else { "text" };
            view! {
                <input type=kind placeholder=placeholders.for_field(field) prop:value=value on:input=input/>
            }
            .into_any()
        };
        view! {
            <label class=class>
                <span class="inquiry-form__label">{field.label()}</span>
                {control}
            </label>
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit();
        });
    };

    view! {
        <form class="inquiry-form" on:submit=on_submit>
            <h3>{title}</h3>
            <p class="inquiry-form__subtitle">{subtitle}</p>
            <div class="inquiry-form__row">
                {field(ContactField::Name)}
                {field(ContactField::Phone)}
            </div>
            {field(ContactField::Email)}
            {field(ContactField::Message)}
            <button type="submit" class="btn btn--dark btn--block">{submit_label} " ➤"</button>
            <p class="inquiry-form__status">{move || form.with(|f| status_message(&f.status))}</p>
        </form>
    }
}

fn field_class(invalid: bool) -> &'static str {
    if invalid { "inquiry-form__field inquiry-form__field--invalid" } else { "inquiry-form__field" }
}

fn status_message(status: &ContactStatus) -> String {
    match status {
        ContactStatus::Editing => String::new(),
        ContactStatus::Acknowledged => "Thank you. Our team will reach out within 12 hours.".to_owned(),
        ContactStatus::Invalid(fields) => {
            let labels = fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ");
            format!("Please check: {labels}.")
        }
    }
}
