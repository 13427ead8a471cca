//! Percent encoding for hash parameter keys and values.

use std::borrow::Cow;

/// Percent-encodes one hash component.
///
/// Everything except ASCII alphanumerics and `-_.~` is encoded, so `&`, `=`
/// and `/` inside values never break the hash grammar.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Decodes one hash component.
///
/// Malformed sequences (invalid UTF-8 after decoding) fall back to the raw
/// input instead of failing the whole route.
pub fn decode_component(value: &str) -> Cow<'_, str> {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(value),
    }
}
