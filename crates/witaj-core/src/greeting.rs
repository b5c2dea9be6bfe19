//! Greeting resolution — builds `"<welcome> <name>!"` from optional input.
//!
//! Every missing or malformed input degrades to a fallback value; the only
//! error that escapes is a failing store.

use crate::error::WitajError;
use crate::lang::{FALLBACK_LANG_ID, FALLBACK_NAME, FALLBACK_WELCOME};
use crate::traits::LangLookup;

/// Greeting service over a language lookup.
#[derive(Clone)]
pub struct HelloService<L> {
    langs: L,
}

impl<L: LangLookup> HelloService<L> {
    pub fn new(langs: L) -> Self {
        Self { langs }
    }

    /// Resolve the final greeting string.
    ///
    /// Fallback chain, in order:
    /// 1. Missing or empty `name` → [`FALLBACK_NAME`].
    /// 2. `lang_id_text` missing or non-numeric → look up the fallback
    ///    language id in the store, so a seeded row can override the
    ///    built-in message; if the store has no such row, use
    ///    [`FALLBACK_WELCOME`].
    /// 3. `lang_id_text` parses to an id the store does not know → use
    ///    [`FALLBACK_WELCOME`] directly, without a second store query.
    ///
    /// The asymmetry between 2 and 3 is deliberate: an explicit-but-unknown
    /// id never re-queries the store for the fallback row.
    pub async fn prepare_greeting(
        &self,
        name: Option<&str>,
        lang_id_text: Option<&str>,
    ) -> Result<String, WitajError> {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => FALLBACK_NAME,
        };

        let parsed_id = lang_id_text.and_then(|t| t.parse::<i64>().ok());

        let welcome = match parsed_id {
            Some(id) => match self.langs.find_by_id(id).await? {
                Some(lang) => lang.welcome_message,
                None => FALLBACK_WELCOME.to_string(),
            },
            None => match self.langs.find_by_id(FALLBACK_LANG_ID).await? {
                Some(lang) => lang.welcome_message,
                None => FALLBACK_WELCOME.to_string(),
            },
        };

        Ok(format!("{welcome} {name}!"))
    }
}
