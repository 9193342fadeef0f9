//! SQLite-backed sensitive word store.
//!
//! Stores words in the `sensitive_words` table. The `word` column is
//! `UNIQUE COLLATE NOCASE`, so ASCII case variants of an existing word are
//! rejected by the database even when two adds race past the service's
//! duplicate check.

use super::{acquire_lock, configure_connection, record_operation_metrics};
use crate::models::{SensitiveWord, WordId};
use crate::storage::WordStore;
use crate::{Error, Result};
use rusqlite::{Connection, ErrorCode, params};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS sensitive_words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL UNIQUE COLLATE NOCASE
)";

const SELECT_ALL: &str = "SELECT id, word FROM sensitive_words ORDER BY id";

const INSERT: &str = "INSERT INTO sensitive_words (word) VALUES (?1)";

const UPDATE_BY_ID: &str = "UPDATE sensitive_words SET word = ?1 WHERE id = ?2";

const DELETE_BY_ID: &str = "DELETE FROM sensitive_words WHERE id = ?1";

const COUNT: &str = "SELECT COUNT(*) FROM sensitive_words";

/// `SQLite`-based sensitive word store.
pub struct SqliteWordStore {
    /// Connection to the `SQLite` database.
    conn: Mutex<Connection>,
    /// Path to the `SQLite` database.
    db_path: PathBuf,
}

impl SqliteWordStore {
    /// Opens (or creates) the word database at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::operation("create_db_dir", e))?;
        }

        let conn = Connection::open(&db_path).map_err(|e| Error::operation("open_word_db", e))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates an in-memory store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| Error::operation("open_word_db_memory", e))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path: PathBuf::from(":memory:"),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Returns the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts `words` when the table is empty, skipping blanks and case
    /// duplicates. Returns the number of words inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or written.
    pub fn seed_if_empty(&self, words: &[String]) -> Result<usize> {
        let mut conn = acquire_lock(&self.conn);

        let count: i64 = conn
            .query_row(COUNT, [], |row| row.get(0))
            .map_err(|e| Error::operation("count_words", e))?;
        if count > 0 || words.is_empty() {
            return Ok(0);
        }

        let tx = conn
            .transaction()
            .map_err(|e| Error::operation("begin_seed", e))?;
        let mut inserted = 0;
        {
            let mut stmt = tx
                .prepare("INSERT OR IGNORE INTO sensitive_words (word) VALUES (?1)")
                .map_err(|e| Error::operation("prepare_seed", e))?;
            for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
                inserted += stmt
                    .execute(params![word])
                    .map_err(|e| Error::operation("seed_word", e))?;
            }
        }
        tx.commit().map_err(|e| Error::operation("commit_seed", e))?;

        tracing::info!(inserted, "Seeded sensitive word list");
        Ok(inserted)
    }

    fn initialize(&self) -> Result<()> {
        let conn = acquire_lock(&self.conn);
        configure_connection(&conn)?;
        conn.execute(CREATE_TABLE, [])
            .map_err(|e| Error::operation("create_sensitive_words_table", e))?;
        Ok(())
    }

    /// Runs a write statement and records its metrics.
    fn execute_write(
        &self,
        operation: &'static str,
        sql: &str,
        params: impl rusqlite::Params,
        word: Option<&str>,
    ) -> Result<bool> {
        let start = Instant::now();
        let result = {
            let conn = acquire_lock(&self.conn);
            conn.execute(sql, params)
        };

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics(operation, start, status);

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(e) if is_unique_violation(&e) => Err(Error::Duplicate {
                word: word.unwrap_or_default().to_string(),
            }),
            Err(e) => Err(Error::operation(operation, e)),
        }
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _) if inner.code == ErrorCode::ConstraintViolation
    )
}

impl WordStore for SqliteWordStore {
    fn select_all(&self) -> Result<Vec<SensitiveWord>> {
        let start = Instant::now();
        let result = (|| -> rusqlite::Result<Vec<SensitiveWord>> {
            let conn = acquire_lock(&self.conn);
            let mut stmt = conn.prepare(SELECT_ALL)?;
            let rows = stmt.query_map([], |row| {
                Ok(SensitiveWord {
                    id: WordId::new(row.get(0)?),
                    word: row.get(1)?,
                })
            })?;
            rows.collect()
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("select_all", start, status);

        result.map_err(|e| Error::operation("select_all_words", e))
    }

    fn insert(&self, word: &str) -> Result<bool> {
        self.execute_write("insert", INSERT, params![word], Some(word))
    }

    fn update(&self, entity: &SensitiveWord) -> Result<bool> {
        self.execute_write(
            "update",
            UPDATE_BY_ID,
            params![entity.word, entity.id.get()],
            Some(&entity.word),
        )
    }

    fn delete(&self, id: WordId) -> Result<bool> {
        self.execute_write("delete", DELETE_BY_ID, params![id.get()], None)
    }
}
