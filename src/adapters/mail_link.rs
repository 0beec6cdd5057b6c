//! `mailto:` link composition for the contact-form fallback.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::controllers::contact::ContactForm;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Build the pre-filled composer link for `form`.
pub fn compose(recipient: &str, form: &ContactForm) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name, form.email, form.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(&form.subject),
        encode_component(&body)
    )
}
