use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Asha".to_owned());
    form.set(ContactField::Email, "asha@brand.com".to_owned());
    form.set(ContactField::Message, "Woven labels, 10k units".to_owned());
    form
}

#[test]
fn empty_draft_reports_required_fields_in_order() {
    let draft = ContactDraft::default();
    assert_eq!(draft.missing_fields(), vec![ContactField::Name, ContactField::Email, ContactField::Message]);
}

#[test]
fn phone_is_optional() {
    let form = filled();
    assert!(form.draft.phone.is_empty());
    assert!(form.draft.missing_fields().is_empty());
}

#[test]
fn email_requires_local_part_and_domain() {
    let mut form = filled();
    for bad in ["", "asha", "@brand.com", "asha@", "as ha@brand.com"] {
        form.set(ContactField::Email, bad.to_owned());
        assert!(form.draft.missing_fields().contains(&ContactField::Email), "{bad:?} accepted");
    }
}

#[test]
fn invalid_submit_keeps_draft_and_flags_fields() {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Asha".to_owned());
    let status = form.submit().clone();
    assert_eq!(status, ContactStatus::Invalid(vec![ContactField::Email, ContactField::Message]));
    assert_eq!(form.get(ContactField::Name), "Asha");
    assert!(form.is_invalid(ContactField::Email));
    assert!(!form.is_invalid(ContactField::Name));
}

#[test]
fn valid_submit_clears_draft_and_acknowledges() {
    let mut form = filled();
    assert_eq!(form.submit(), &ContactStatus::Acknowledged);
    assert_eq!(form.draft, ContactDraft::default());
}

#[test]
fn editing_resets_status() {
    let mut form = ContactForm::default();
    form.submit();
    form.set(ContactField::Phone, "+91".to_owned());
    assert_eq!(form.status, ContactStatus::Editing);
}

#[test]
fn field_labels_match_form_copy() {
    assert_eq!(ContactField::Name.label(), "Client Name");
    assert_eq!(ContactField::Phone.label(), "Contact Number");
    assert_eq!(ContactField::Email.label(), "Corporate Email");
    assert_eq!(ContactField::Message.label(), "Project Brief");
}
