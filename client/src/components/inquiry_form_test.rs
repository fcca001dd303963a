use super::*;

#[test]
fn status_message_lists_invalid_fields() {
    let status = ContactStatus::Invalid(vec![ContactField::Email, ContactField::Message]);
    assert_eq!(status_message(&status), "Please check: Corporate Email, Project Brief.");
}

#[test]
fn status_message_is_blank_while_editing() {
    assert_eq!(status_message(&ContactStatus::Editing), "");
    assert!(status_message(&ContactStatus::Acknowledged).starts_with("Thank you"));
}

#[test]
fn invalid_fields_get_modifier() {
    assert_eq!(field_class(false), "inquiry-form__field");
    assert!(field_class(true).ends_with("--invalid"));
}

#[test]
fn placeholders_map_to_fields() {
    let placeholders = Placeholders { name: "n", phone: "p", email: "e", message: "m" };
    assert_eq!(placeholders.for_field(ContactField::Phone), "p");
    assert_eq!(placeholders.for_field(ContactField::Message), "m");
}
