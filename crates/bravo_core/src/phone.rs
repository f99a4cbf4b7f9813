//! Phone normalization for WhatsApp deep links.
//!
//! # Invariants
//! - A deep link is produced only when the raw phone contains digits.
//! - Everything except digits is stripped before building the link.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+").expect("valid digit regex"));

/// Builds a `https://wa.me/<digits>` link from a raw phone string.
///
/// Returns `None` when the input has no digits at all.
pub fn whatsapp_link(raw_phone: &str) -> Option<String> {
    let digits = NON_DIGIT_RE.replace_all(raw_phone, "");
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{digits}"))
}

#[cfg(test)]
mod tests {
    use super::whatsapp_link;

    #[test]
    fn strips_formatting_characters() {
        assert_eq!(
            whatsapp_link("+51 943 123-456").as_deref(),
            Some("https://wa.me/51943123456")
        );
    }

    #[test]
    fn rejects_phone_without_digits() {
        assert_eq!(whatsapp_link(""), None);
        assert_eq!(whatsapp_link("sin numero"), None);
    }
}
