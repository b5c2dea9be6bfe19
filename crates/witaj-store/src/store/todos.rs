//! Todo list and toggle.

use super::Store;
use witaj_core::{error::WitajError, lang::Todo};

impl Store {
    /// Return all todos in ascending id order.
    pub async fn find_all_todos(&self) -> Result<Vec<Todo>, WitajError> {
        let rows: Vec<(i64, String, bool)> =
            sqlx::query_as("SELECT id, description, done FROM todos ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| WitajError::Store(format!("list todos failed: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(id, description, done)| Todo {
                id,
                description,
                done,
            })
            .collect())
    }

    /// Persist a new todo with `done = false` and return it.
    pub async fn add_todo(&self, description: &str) -> Result<Todo, WitajError> {
        let result = sqlx::query("INSERT INTO todos (description) VALUES (?)")
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(|e| WitajError::Store(format!("add todo failed: {e}")))?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            description: description.to_string(),
            done: false,
        })
    }

    /// Flip the `done` flag of the todo with the given id and return the
    /// updated row. One transaction covers the read-modify-write; an
    /// unknown id rolls back and surfaces as `NotFound`.
    pub async fn toggle_todo(&self, id: i64) -> Result<Todo, WitajError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| WitajError::Store(format!("toggle todo begin failed: {e}")))?;

        let result = sqlx::query("UPDATE todos SET done = NOT done WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| WitajError::Store(format!("toggle todo failed: {e}")))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back.
            return Err(WitajError::NotFound(format!("no todo with id {id}")));
        }

        let (id, description, done): (i64, String, bool) =
            sqlx::query_as("SELECT id, description, done FROM todos WHERE id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| WitajError::Store(format!("toggle todo fetch failed: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| WitajError::Store(format!("toggle todo commit failed: {e}")))?;

        Ok(Todo {
            id,
            description,
            done,
        })
    }
}
