//! SQLite-backed storage for todo items.
//!
//! # Design
//! - One connection per store, shared by all in-flight requests behind a
//!   mutex. Every operation is a single short parameterized statement, so the
//!   lock is held only for the duration of that statement.
//! - No transactions: each operation touches at most one row and there are no
//!   cross-row invariants to protect.
//! - `update`/`delete` take the identifier as an opaque string and bind it as
//!   a text parameter. The integer column's affinity coerces numeric strings;
//!   anything else matches zero rows, which is reported as success.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use tracing::info;

use crate::error::StoreResult;
use crate::types::TodoItem;

/// Status written for every newly created item.
pub const DEFAULT_STATUS: &str = "incomplete";

const SCHEMA_TODOS: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed TEXT DEFAULT 'incomplete'
);";
const SELECT_TODOS: &str = "SELECT id, title, completed FROM todos";
const INSERT_TODO: &str = "INSERT INTO todos (title, completed) VALUES (?1, ?2)";
const UPDATE_TODO: &str = "UPDATE todos SET title = ?1, completed = ?2 WHERE id = ?3";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";

/// Durable store for the todo table.
///
/// Cheap to clone; clones share the same connection. Construct one in `main`
/// (or per test with [`TodoStore::open_in_memory`]) and hand it to the router.
#[derive(Clone)]
pub struct TodoStore {
    conn: Arc<Mutex<Connection>>,
}

impl TodoStore {
    /// Opens (creating if needed) the database file at `path` and ensures the
    /// `todos` table exists. Safe to call on every startup.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(&path)?;
        let store = Self::bootstrap(conn)?;
        info!(path = %path.as_ref().display(), "todo database ready");
        Ok(store)
    }

    /// Opens a private in-memory database with the schema applied. Used by
    /// tests that want an isolated store per case.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.execute(SCHEMA_TODOS, [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Returns every stored item in storage order. An empty table yields an
    /// empty vec, not an error.
    pub fn list(&self) -> StoreResult<Vec<TodoItem>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_TODOS)?;
        let rows = stmt.query_map([], |row| {
            Ok(TodoItem {
                id: row.get(0)?,
                title: row.get(1)?,
                completed: row.get(2)?,
            })
        })?;

        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?);
        }
        Ok(todos)
    }

    /// Inserts a new item with `completed = "incomplete"` and returns the
    /// identifier SQLite assigned to it.
    pub fn create(&self, title: &str) -> StoreResult<i64> {
        let conn = self.conn.lock();
        conn.execute(INSERT_TODO, params![title, DEFAULT_STATUS])?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrites the title and completed fields of the row matching `id`.
    /// An id that matches no rows is a successful no-op.
    pub fn update(&self, id: &str, title: &str, completed: &str) -> StoreResult<()> {
        self.conn
            .lock()
            .execute(UPDATE_TODO, params![title, completed, id])?;
        Ok(())
    }

    /// Removes the row matching `id`. An id that matches no rows is a
    /// successful no-op.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.conn.lock().execute(DELETE_TODO, params![id])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TodoStore {
        TodoStore::open_in_memory().unwrap()
    }

    #[test]
    fn list_is_empty_on_fresh_store() {
        assert!(store().list().unwrap().is_empty());
    }

    #[test]
    fn create_then_list_round_trips_title() {
        let store = store();
        store.create("Buy milk").unwrap();

        let todos = store.list().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Buy milk");
        assert_eq!(todos[0].completed, DEFAULT_STATUS);
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = store();
        let first = store.create("one").unwrap();
        let second = store.create("two").unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn create_accepts_empty_title() {
        let store = store();
        store.create("").unwrap();
        assert_eq!(store.list().unwrap()[0].title, "");
    }

    #[test]
    fn update_overwrites_title_and_completed() {
        let store = store();
        let id = store.create("Buy milk").unwrap();
        store.update(&id.to_string(), "Buy milk", "done").unwrap();

        let todos = store.list().unwrap();
        assert_eq!(todos[0].title, "Buy milk");
        assert_eq!(todos[0].completed, "done");
    }

    #[test]
    fn update_accepts_arbitrary_completed_text() {
        let store = store();
        let id = store.create("task").unwrap();
        store.update(&id.to_string(), "task", "half-way there").unwrap();
        assert_eq!(store.list().unwrap()[0].completed, "half-way there");
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let store = store();
        store.create("keep me").unwrap();
        store.update("999", "changed", "done").unwrap();

        let todos = store.list().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "keep me");
        assert_eq!(todos[0].completed, DEFAULT_STATUS);
    }

    #[test]
    fn delete_removes_row() {
        let store = store();
        let id = store.create("ephemeral").unwrap();
        store.delete(&id.to_string()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let store = store();
        let id = store.create("once").unwrap();
        store.delete(&id.to_string()).unwrap();
        store.delete(&id.to_string()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn non_numeric_id_matches_no_rows() {
        let store = store();
        store.create("safe").unwrap();
        store.update("not-a-number", "changed", "done").unwrap();
        store.delete("not-a-number").unwrap();

        let todos = store.list().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "safe");
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = store();
        let first = store.create("first").unwrap();
        store.delete(&first.to_string()).unwrap();
        let second = store.create("second").unwrap();
        assert!(second > first);
    }
}
