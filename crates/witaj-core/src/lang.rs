//! Domain records: language rows and todo items.

use serde::{Deserialize, Serialize};

/// Name substituted into the greeting when the caller supplies none.
pub const FALLBACK_NAME: &str = "world";

/// Identifier of the well-known fallback language.
pub const FALLBACK_LANG_ID: i64 = 1;

/// Welcome message of the fallback language, used when the store cannot
/// supply one.
pub const FALLBACK_WELCOME: &str = "Hello";

/// A language row: an id, the welcome message shown before the name, and a
/// short informational language tag. Rows are seeded at store
/// initialization and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lang {
    pub id: i64,
    pub welcome_message: String,
    pub code: String,
}

impl Lang {
    /// The well-known fallback language record.
    pub fn fallback() -> Self {
        Self {
            id: FALLBACK_LANG_ID,
            welcome_message: FALLBACK_WELCOME.to_string(),
            code: "en".to_string(),
        }
    }
}

/// A todo item. `done` is the only field that ever changes, via toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub done: bool,
}
