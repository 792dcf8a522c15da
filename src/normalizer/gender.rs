//! Gender canonicalisation

use crate::types::Gender;

/// Map a source gender value to [`Gender`]
///
/// `M`/`MALE` and `F`/`FEMALE` (any case) are recognised; any other non-empty
/// value is `Other`. Blank input is absent.
pub fn canonical_gender(raw: &str) -> Option<Gender> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match value.to_ascii_uppercase().as_str() {
        "M" | "MALE" => Some(Gender::Male),
        "F" | "FEMALE" => Some(Gender::Female),
        _ => Some(Gender::Other),
    }
}
