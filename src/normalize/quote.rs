//! Quote normalization.

use serde_json::Value;

use super::fields::optional_str;
use crate::types::Quote;

/// Pick the first quote of the provider's list; never fails.
///
/// An empty list or a non-list body yields [`Quote::fallback`]; a first entry
/// missing either field takes that field's fallback.
pub fn normalize_quote(raw: &Value) -> Quote {
    let Some(first) = raw.as_array().and_then(|items| items.first()) else {
        return Quote::fallback();
    };
    Quote {
        quote: optional_str(first, "/quote", Quote::FALLBACK_TEXT).to_string(),
        author: optional_str(first, "/author", Quote::FALLBACK_AUTHOR).to_string(),
    }
}

/// The message used whenever the quote provider cannot be reached.
pub const QUOTE_ERROR: &str = "Couldn't fetch a quote right now.";
