//! Name title-casing and splitting

use serde::Serialize;

/// Title-case a name: every alphabetic run starts upper-case, the rest is lower-case
///
/// Whitespace is collapsed to single spaces. Non-alphabetic characters break a
/// run, so `o'brien` becomes `O'Brien`.
pub fn title_case(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len());
    let mut in_run = false;
    for c in collapsed.chars() {
        if c.is_alphabetic() {
            if in_run {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// First / middle / last split used by onboarding forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameParts {
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl NameParts {
    /// First token is the first name, last token the last name, anything between the middle name
    pub fn split(name: &str) -> Self {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Self::default(),
            [only] => Self {
                first: title_case(only),
                middle: None,
                last: None,
            },
            [first, middle @ .., last] => Self {
                first: title_case(first),
                middle: if middle.is_empty() {
                    None
                } else {
                    Some(title_case(&middle.join(" ")))
                },
                last: Some(title_case(last)),
            },
        }
    }
}
