//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `mobility_trace` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, RunSummaryRow, TraceRow};
use crate::writer::TraceWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS mobility_trace (
                 node_id   INTEGER NOT NULL,
                 time_secs REAL    NOT NULL,
                 x         REAL    NOT NULL,
                 y         REAL    NOT NULL,
                 z         REAL    NOT NULL,
                 vx        REAL    NOT NULL,
                 vy        REAL    NOT NULL,
                 vz        REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 nodes           INTEGER NOT NULL,
                 steps           INTEGER NOT NULL,
                 samples         INTEGER NOT NULL,
                 final_time_secs REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl TraceWriter for SqliteWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO mobility_trace \
                 (node_id, time_secs, x, y, z, vx, vy, vz) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.node_id,
                    row.time_secs,
                    row.x,
                    row.y,
                    row.z,
                    row.vx,
                    row.vy,
                    row.vz,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary (nodes, steps, samples, final_time_secs) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.nodes, row.steps, row.samples, row.final_time_secs],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
