//! The durable session store: one active survey session at a time,
//! persisted as whole-value JSON blobs under fixed keys.
//!
//! Loads never fail on bad payloads. An absent key or a blob that no
//! longer parses both read back as `None` — callers treat that as "start
//! a fresh survey," never as a fatal condition.

use std::env;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use vb_core::{Board, BoardFeedback, SelectionSet};

use crate::error::Result;
use crate::schema;

/// Key for the serialized [`SelectionSet`].
pub const SELECTIONS_KEY: &str = "visionBoardSelections";
/// Key for the serialized [`Board`] (images plus derived style tags).
pub const BOARD_KEY: &str = "currentBoard";
/// Key for the serialized [`BoardFeedback`].
pub const FEEDBACK_KEY: &str = "boardFeedback";

/// Default base directory for all vision-board storage.
pub fn default_base_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".visionboard")
}

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Open the session database under `VB_DATA_DIR` if set, else the
    /// default base directory, creating the directory as needed.
    pub fn open_default() -> Result<Self> {
        let base = env::var("VB_DATA_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_base_dir);
        if let Err(e) = std::fs::create_dir_all(&base) {
            tracing::warn!("could not create {}: {e}", base.display());
        }
        Self::open(&base.join("session.db"))
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // --- Raw key/value access ---

    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM session WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).ok();
        Ok(result)
    }

    fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO session (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let blob = serde_json::to_string(value)?;
        self.set_value(key, &blob)
    }

    /// Load and parse a blob. Absent keys and unparseable payloads both
    /// yield `None`; the latter is logged and the session treated as new.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(blob) = self.get_value(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("discarding unreadable session value '{key}': {e}");
                Ok(None)
            }
        }
    }

    // --- Typed session accessors ---

    pub fn save_selections(&self, selections: &SelectionSet) -> Result<()> {
        self.save(SELECTIONS_KEY, selections)
    }

    pub fn load_selections(&self) -> Result<Option<SelectionSet>> {
        self.load(SELECTIONS_KEY)
    }

    pub fn save_board(&self, board: &Board) -> Result<()> {
        self.save(BOARD_KEY, board)
    }

    pub fn load_board(&self) -> Result<Option<Board>> {
        self.load(BOARD_KEY)
    }

    pub fn save_feedback(&self, feedback: &BoardFeedback) -> Result<()> {
        self.save(FEEDBACK_KEY, feedback)
    }

    pub fn load_feedback(&self) -> Result<Option<BoardFeedback>> {
        self.load(FEEDBACK_KEY)
    }

    /// Drop every session key. The next restore starts a fresh survey.
    pub fn clear_session(&self) -> Result<()> {
        self.conn.execute("DELETE FROM session", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vb_core::{SelectionSet, finalize, survey_questions};

    fn sample_selections() -> SelectionSet {
        let questions = survey_questions();
        let mut set = SelectionSet::new();
        set.toggle(&questions[0], &questions[0].options[0]).unwrap();
        set.toggle(&questions[0], &questions[0].options[2]).unwrap();
        set.toggle(&questions[3], &questions[3].options[1]).unwrap();
        set
    }

    #[test]
    fn test_selections_roundtrip() {
        let store = SessionStore::open_in_memory().unwrap();
        let selections = sample_selections();

        store.save_selections(&selections).unwrap();
        let loaded = store.load_selections().unwrap().unwrap();
        assert_eq!(loaded, selections);
    }

    #[test]
    fn test_restore_without_persist_is_no_session() {
        let store = SessionStore::open_in_memory().unwrap();
        assert!(store.load_selections().unwrap().is_none());
        assert!(store.load_board().unwrap().is_none());
        assert!(store.load_feedback().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_blob_reads_as_absent() {
        let store = SessionStore::open_in_memory().unwrap();
        store.set_value(SELECTIONS_KEY, "{not json").unwrap();
        assert!(store.load_selections().unwrap().is_none());

        // Valid JSON of the wrong shape is also "no session."
        store.set_value(BOARD_KEY, "[1, 2, 3]").unwrap();
        assert!(store.load_board().unwrap().is_none());
    }

    #[test]
    fn test_board_roundtrip() {
        let store = SessionStore::open_in_memory().unwrap();
        let questions = survey_questions();
        let board = finalize(&questions, &sample_selections()).unwrap();

        store.save_board(&board).unwrap();
        let loaded = store.load_board().unwrap().unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = SessionStore::open_in_memory().unwrap();
        let questions = survey_questions();

        let first = sample_selections();
        store.save_selections(&first).unwrap();

        let mut second = SelectionSet::new();
        second
            .toggle(&questions[1], &questions[1].options[0])
            .unwrap();
        store.save_selections(&second).unwrap();

        let loaded = store.load_selections().unwrap().unwrap();
        assert_eq!(loaded, second, "no partial-write or merge semantics");
    }

    #[test]
    fn test_feedback_roundtrip() {
        let store = SessionStore::open_in_memory().unwrap();
        let fb = vb_core::BoardFeedback::new(true);
        store.save_feedback(&fb).unwrap();
        assert_eq!(store.load_feedback().unwrap().unwrap(), fb);
    }

    #[test]
    fn test_clear_session_drops_all_keys() {
        let store = SessionStore::open_in_memory().unwrap();
        let questions = survey_questions();
        let selections = sample_selections();

        store.save_selections(&selections).unwrap();
        store
            .save_board(&finalize(&questions, &selections).unwrap())
            .unwrap();
        store
            .save_feedback(&vb_core::BoardFeedback::new(false))
            .unwrap();

        store.clear_session().unwrap();
        assert!(store.load_selections().unwrap().is_none());
        assert!(store.load_board().unwrap().is_none());
        assert!(store.load_feedback().unwrap().is_none());
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.db");

        let selections = sample_selections();
        {
            let store = SessionStore::open(&path).unwrap();
            store.save_selections(&selections).unwrap();
        }

        let store = SessionStore::open(&path).unwrap();
        let loaded = store.load_selections().unwrap().unwrap();
        assert_eq!(loaded, selections);
    }
}
