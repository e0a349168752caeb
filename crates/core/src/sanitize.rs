//! Output sanitization for user-supplied text.
//!
//! Text fields are stored exactly as submitted and cleaned on the way out,
//! so a stored `<script>` never reaches a client intact.

/// Entities whose user-supplied text must be cleaned before leaving the
/// service.
pub trait Sanitize {
    fn sanitize(&mut self);
}

/// Strip unsafe markup from `input`, keeping plain text untouched.
///
/// Script and style elements are dropped together with their content;
/// stray HTML-significant characters are escaped.
pub fn sanitize_text(input: &str) -> String {
    ammonia::clean(input)
}

/// Sanitize an optional text field in place.
pub fn sanitize_opt(value: &mut Option<String>) {
    if let Some(text) = value.as_mut() {
        *text = sanitize_text(text);
    }
}
