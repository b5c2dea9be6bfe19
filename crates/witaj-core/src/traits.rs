use crate::{error::WitajError, lang::Lang};
use async_trait::async_trait;

/// Language lookup — the single seam between greeting resolution and the
/// persistence layer.
///
/// Absence is a normal outcome: an unknown id yields `Ok(None)`, never an
/// error. Only an unreachable store produces `Err`.
#[async_trait]
pub trait LangLookup: Send + Sync {
    /// Find a language row by its integer identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Lang>, WitajError>;
}
