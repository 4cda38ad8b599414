// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session journal: every published event as one JSON line

use crate::effect::Event;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode {name}: {source}")]
    Encode {
        name: &'static str,
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Corrupt {
        line: usize,
        source: serde_json::Error,
    },
}

/// One journaled event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 1-based position in the journal, continued across reopens
    pub sequence: u64,
    /// Milliseconds since this writer opened the journal
    pub elapsed_ms: u64,
    /// `category:action` name of the event
    pub name: String,
    pub event: Event,
}

/// Append-only journal writer. Lines are flushed as they are written, so a
/// journal cut short by a crash still reads back up to its last event.
pub struct EventLog {
    path: PathBuf,
    writer: LineWriter<File>,
    sequence: u64,
    opened: Instant,
}

impl EventLog {
    /// Open or create a journal, numbering after any existing entries
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        let mut sequence = 0;
        for line in BufReader::new(&file).lines() {
            if !line?.trim().is_empty() {
                sequence += 1;
            }
        }

        Ok(Self {
            path,
            writer: LineWriter::new(file),
            sequence,
            opened: Instant::now(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, event: &Event) -> Result<EventRecord, JournalError> {
        let record = EventRecord {
            sequence: self.sequence + 1,
            elapsed_ms: self.opened.elapsed().as_millis() as u64,
            name: event.name().to_string(),
            event: event.clone(),
        };
        let json = serde_json::to_string(&record).map_err(|source| JournalError::Encode {
            name: event.name(),
            source,
        })?;
        writeln!(self.writer, "{json}")?;
        self.sequence = record.sequence;
        Ok(record)
    }

    /// Read back a journal written by [`EventLog::append`]
    pub fn read_all(path: &Path) -> Result<Vec<EventRecord>, JournalError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut records = Vec::new();
        for (index, line) in BufReader::new(File::open(path)?).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| JournalError::Corrupt {
                line: index + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
