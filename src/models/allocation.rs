//! Allocation result model.
//!
//! An allocation result is the full, atomic output of one generation run:
//! one `RoomAllocation` per catalog room, in catalog order, each holding
//! the students seated there in seat-label order. Results are read-only;
//! regenerating produces a new, independent value.
//!
//! Deserialized results are re-checked against the seating invariants and
//! never carry a catalog revision, so a result read back from the wire is
//! always stale against a live catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Room, RoomId};
use crate::error::{Result, SeatingError};
use crate::grid::parse_seat_label;
use crate::validation::check_room_fields;

/// A student placed on a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// Seated student ID.
    pub student_id: String,
    /// Student display name (denormalized for rendering).
    pub student_name: String,
    /// Exam subject written on the seat.
    pub exam_subject: String,
    /// Seat label, e.g. `B3`.
    pub seat_label: String,
}

/// Seats assigned in one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoomAllocationRecord")]
pub struct RoomAllocation {
    room_id: RoomId,
    room_name: String,
    exam_id: String,
    rows: u32,
    cols: u32,
    seats: Vec<SeatAssignment>,
}

/// Where a single student sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPlacement {
    /// Room ID.
    pub room_id: RoomId,
    /// Room display name.
    pub room_name: String,
    /// Seat label within the room.
    pub seat_label: String,
}

/// Output of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AllocationRecord")]
pub struct AllocationResult {
    rooms: Vec<RoomAllocation>,
    roster_size: usize,
    #[serde(skip_serializing)]
    catalog_revision: Option<u64>,
}

/// Unvalidated wire shape of a room allocation.
#[derive(Deserialize)]
struct RoomAllocationRecord {
    room_id: RoomId,
    room_name: String,
    exam_id: String,
    rows: u32,
    cols: u32,
    seats: Vec<SeatAssignment>,
}

/// Unvalidated wire shape of an allocation result.
#[derive(Deserialize)]
struct AllocationRecord {
    rooms: Vec<RoomAllocation>,
    roster_size: usize,
}

impl TryFrom<RoomAllocationRecord> for RoomAllocation {
    type Error = SeatingError;

    fn try_from(r: RoomAllocationRecord) -> Result<Self> {
        let room_id = r.room_id;
        let invalid = |msg: String| SeatingError::InvalidAllocation(format!("room {room_id}: {msg}"));

        check_room_fields(&r.room_name, r.rows, r.cols).map_err(|e| invalid(e.to_string()))?;
        let capacity = r.rows as usize * r.cols as usize;
        if r.seats.len() > capacity {
            return Err(invalid(format!(
                "{} seats exceed capacity {capacity}",
                r.seats.len()
            )));
        }

        let mut labels = HashSet::new();
        for seat in &r.seats {
            match parse_seat_label(&seat.seat_label) {
                Some((row, col)) if row < r.rows && col < r.cols => {}
                _ => return Err(invalid(format!("seat {} is off the grid", seat.seat_label))),
            }
            if !labels.insert(seat.seat_label.as_str()) {
                return Err(invalid(format!("seat {} used twice", seat.seat_label)));
            }
        }

        Ok(RoomAllocation::new(
            r.room_id,
            r.room_name,
            r.exam_id,
            r.rows,
            r.cols,
            r.seats,
        ))
    }
}

impl TryFrom<AllocationRecord> for AllocationResult {
    type Error = SeatingError;

    fn try_from(r: AllocationRecord) -> Result<Self> {
        let mut students = HashSet::new();
        for seat in r.rooms.iter().flat_map(|room| room.seats()) {
            if !students.insert(seat.student_id.as_str()) {
                return Err(SeatingError::InvalidAllocation(format!(
                    "student {} seated twice",
                    seat.student_id
                )));
            }
        }
        if students.len() > r.roster_size {
            return Err(SeatingError::InvalidAllocation(format!(
                "{} students placed from a roster of {}",
                students.len(),
                r.roster_size
            )));
        }
        Ok(AllocationResult::new(r.rooms, r.roster_size))
    }
}

impl SeatAssignment {
    /// Creates a seat assignment.
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        exam_subject: impl Into<String>,
        seat_label: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            exam_subject: exam_subject.into(),
            seat_label: seat_label.into(),
        }
    }
}

impl RoomAllocation {
    pub(crate) fn new(
        room_id: RoomId,
        room_name: impl Into<String>,
        exam_id: impl Into<String>,
        rows: u32,
        cols: u32,
        seats: Vec<SeatAssignment>,
    ) -> Self {
        Self {
            room_id,
            room_name: room_name.into(),
            exam_id: exam_id.into(),
            rows,
            cols,
            seats,
        }
    }

    /// Room ID.
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Room display name at generation time.
    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// Exam ID for this room's sitting.
    pub fn exam_id(&self) -> &str {
        &self.exam_id
    }

    /// Seat assignments in seat-label order.
    pub fn seats(&self) -> &[SeatAssignment] {
        &self.seats
    }

    /// Number of seated students.
    pub fn placed(&self) -> usize {
        self.seats.len()
    }

    /// Room capacity at generation time.
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether this allocation was made for `room` as it is now
    /// (same id, name, and shape).
    pub fn matches_room(&self, room: &Room) -> bool {
        self.room_id == room.id()
            && self.room_name == room.name()
            && self.rows == room.rows()
            && self.cols == room.cols()
    }

    /// Finds the assignment on a given seat.
    pub fn seat_at(&self, seat_label: &str) -> Option<&SeatAssignment> {
        self.seats.iter().find(|s| s.seat_label == seat_label)
    }

    /// Row-major seat map including empty seats (`None`).
    ///
    /// `grid()[r][c]` is the seat in zero-based row `r`, column `c`.
    pub fn grid(&self) -> Vec<Vec<Option<&SeatAssignment>>> {
        let mut grid = vec![vec![None; self.cols as usize]; self.rows as usize];
        for seat in &self.seats {
            if let Some((r, c)) = parse_seat_label(&seat.seat_label) {
                if let Some(cell) = grid
                    .get_mut(r as usize)
                    .and_then(|row| row.get_mut(c as usize))
                {
                    *cell = Some(seat);
                }
            }
        }
        grid
    }
}

impl AllocationResult {
    pub(crate) fn new(rooms: Vec<RoomAllocation>, roster_size: usize) -> Self {
        Self {
            rooms,
            roster_size,
            catalog_revision: None,
        }
    }

    pub(crate) fn with_catalog_revision(mut self, revision: u64) -> Self {
        self.catalog_revision = Some(revision);
        self
    }

    /// Per-room allocations in catalog order.
    pub fn rooms(&self) -> &[RoomAllocation] {
        &self.rooms
    }

    /// Allocation for one room.
    pub fn room_allocation(&self, room_id: RoomId) -> Option<&RoomAllocation> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    /// Room and seat of one student, if placed.
    pub fn student_allocation(&self, student_id: &str) -> Option<StudentPlacement> {
        self.rooms.iter().find_map(|room| {
            room.seats
                .iter()
                .find(|s| s.student_id == student_id)
                .map(|s| StudentPlacement {
                    room_id: room.room_id,
                    room_name: room.room_name.clone(),
                    seat_label: s.seat_label.clone(),
                })
        })
    }

    /// Number of students in the roster this result was built from.
    pub fn roster_size(&self) -> usize {
        self.roster_size
    }

    /// Students seated across all rooms.
    pub fn total_placed(&self) -> usize {
        self.rooms.iter().map(RoomAllocation::placed).sum()
    }

    /// Students left without a seat.
    pub fn unplaced_count(&self) -> usize {
        self.roster_size.saturating_sub(self.total_placed())
    }

    /// Whether every roster student got a seat.
    pub fn is_complete(&self) -> bool {
        self.unplaced_count() == 0
    }

    /// Catalog revision the result was generated against, when generated
    /// from a `RoomCatalog`.
    pub fn catalog_revision(&self) -> Option<u64> {
        self.catalog_revision
    }
}
