use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use crate::scheduler::persistence::ProgressStore;
use crate::scheduler::types::CardRecord;
use crate::storage::StorageResult;

const INIT_SCHEMA: &str = include_str!("schema.sql");

const CLOCK_KEY: &str = "virtual_clock";

/// SQLite-backed progress store. One connection behind a mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StorageResult<Self> {
        conn.execute_batch(INIT_SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<CardRecord> {
        Ok(CardRecord {
            num_right: row.get::<_, i64>("num_right")?.max(0) as u32,
            num_wrong: row.get::<_, i64>("num_wrong")?.max(0) as u32,
            // A negative bucket cannot come from our own writes, but the
            // file is editable; clamp rather than fail.
            bucket: row.get::<_, i64>("bucket")?.max(0) as usize,
            next_time: row.get("next_time")?,
        })
    }
}

impl ProgressStore for SqliteStore {
    fn get(&self, front: &str, back: &str) -> StorageResult<Option<CardRecord>> {
        let conn = self.conn.lock();
        let record = conn
            .query_row(
                "SELECT num_right, num_wrong, bucket, next_time
                 FROM card_progress WHERE front = ?1 AND back = ?2",
                params![front, back],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    fn put(&self, front: &str, back: &str, record: &CardRecord) -> StorageResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO card_progress (front, back, num_right, num_wrong, bucket, next_time, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT (front, back) DO UPDATE SET
                 num_right = excluded.num_right,
                 num_wrong = excluded.num_wrong,
                 bucket = excluded.bucket,
                 next_time = excluded.next_time,
                 updated_at = excluded.updated_at",
            params![
                front,
                back,
                record.num_right as i64,
                record.num_wrong as i64,
                record.bucket as i64,
                record.next_time,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn get_clock(&self) -> StorageResult<Option<f64>> {
        let conn = self.conn.lock();
        let value = conn
            .query_row(
                "SELECT value FROM scheduler_meta WHERE key = ?1",
                params![CLOCK_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_clock(&self, value: f64) -> StorageResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO scheduler_meta (key, value) VALUES (?1, ?2)",
            params![CLOCK_KEY, value],
        )?;
        Ok(())
    }
}
