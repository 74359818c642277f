//! Exam room model.
//!
//! A room is a fixed `rows × cols` seat grid. Capacity is always derived
//! from the shape. Rooms are validated on construction and on
//! deserialization, so every `Room` value satisfies `1 ≤ rows ≤ 26`,
//! `cols ≥ 1` and a non-empty name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SeatingError};
use crate::grid;
use crate::validation::check_room_fields;

/// Stable room identifier, assigned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoomRecord")]
pub struct Room {
    id: RoomId,
    name: String,
    rows: u32,
    cols: u32,
}

/// Unvalidated wire shape of a room.
#[derive(Deserialize)]
struct RoomRecord {
    id: RoomId,
    name: String,
    rows: u32,
    cols: u32,
}

impl TryFrom<RoomRecord> for Room {
    type Error = SeatingError;

    fn try_from(r: RoomRecord) -> Result<Self> {
        Room::new(r.id, r.name, r.rows, r.cols)
    }
}

impl Room {
    /// Creates a validated room.
    ///
    /// # Errors
    /// `Validation` if the name is blank, a dimension is zero, or
    /// `rows` exceeds the seat-label alphabet.
    pub fn new(id: RoomId, name: impl Into<String>, rows: u32, cols: u32) -> Result<Self> {
        let name = name.into();
        check_room_fields(&name, rows, cols)?;
        Ok(Self {
            id,
            name,
            rows,
            cols,
        })
    }

    /// Room identifier.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of seat rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of seats per row.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Seat count (`rows * cols`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Seat labels in assignment order.
    pub fn seat_labels(&self) -> Vec<String> {
        grid::seat_labels(self.rows, self.cols)
    }

    /// Returns a copy with the editable fields replaced, re-validated.
    pub(crate) fn replaced(&self, name: impl Into<String>, rows: u32, cols: u32) -> Result<Self> {
        Self::new(self.id, name, rows, cols)
    }
}
