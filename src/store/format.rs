//! On-disk encodings for graph snapshots.

use std::fmt;
use std::io::{Read, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::snapshot::GraphSnapshot;

/// Encoding used to write a [`GraphSnapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// JSON, readable and portable.
    #[default]
    Json,
    /// Compact binary encoding via bincode.
    Bincode,
}

impl SnapshotFormat {
    /// File extension for snapshots in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Bincode => "bin",
        }
    }

    pub fn encode<W: Write>(&self, snapshot: &GraphSnapshot, writer: W) -> Result<()> {
        match self {
            SnapshotFormat::Json => serde_json::to_writer(writer, snapshot)?,
            SnapshotFormat::Bincode => bincode::serialize_into(writer, snapshot)?,
        }
        Ok(())
    }

    pub fn decode<R: Read>(&self, reader: R) -> Result<GraphSnapshot> {
        let snapshot = match self {
            SnapshotFormat::Json => serde_json::from_reader(reader)?,
            SnapshotFormat::Bincode => bincode::deserialize_from(reader)?,
        };
        Ok(snapshot)
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotFormat::Json => write!(f, "json"),
            SnapshotFormat::Bincode => write!(f, "bincode"),
        }
    }
}
