//! Read-only language lookup.

use super::Store;
use async_trait::async_trait;
use witaj_core::{error::WitajError, lang::Lang, traits::LangLookup};

impl Store {
    /// Find a language row by id. Absence is `Ok(None)`, not an error.
    pub async fn find_lang_by_id(&self, id: i64) -> Result<Option<Lang>, WitajError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, welcome_message, code FROM languages WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| WitajError::Store(format!("language lookup failed: {e}")))?;

        Ok(row.map(|(id, welcome_message, code)| Lang {
            id,
            welcome_message,
            code,
        }))
    }
}

#[async_trait]
impl LangLookup for Store {
    async fn find_by_id(&self, id: i64) -> Result<Option<Lang>, WitajError> {
        self.find_lang_by_id(id).await
    }
}
