use super::*;

#[test]
fn greeting_is_percent_encoded() {
    assert_eq!(
        site_link(GREETING),
        "https://wa.me/919036333005?text=Hello%20RKS%20Creations%2C%20I%20would%20like%20to%20know%20more%20about%20your%20products."
    );
}

#[test]
fn display_number_is_normalized() {
    assert_eq!(chat_link("+91 90363 33005", "hi"), "https://wa.me/919036333005?text=hi");
}

#[test]
fn reserved_characters_are_escaped() {
    let link = chat_link(WHATSAPP_NUMBER, "a&b=c?d/e");
    assert!(link.ends_with("?text=a%26b%3Dc%3Fd%2Fe"), "{link}");
}

#[test]
fn empty_text_omits_query() {
    assert_eq!(chat_link(WHATSAPP_NUMBER, ""), "https://wa.me/919036333005");
}
