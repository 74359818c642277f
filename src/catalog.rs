//! Room catalog.
//!
//! Ordered collection of exam rooms with CRUD operations. Order is
//! insertion order and never changes. Reads hand out owned snapshots, so a
//! generation run never observes a catalog edit made after it started.
//!
//! Every successful edit bumps a revision counter. A result is stale when
//! it was generated against another revision or when its room snapshot no
//! longer matches the catalog (e.g. after reloading from the remote store):
//! room order and per-room shares depend on the whole catalog, so any
//! change invalidates all of it.

use tracing::info;

use crate::error::{Result, SeatingError};
use crate::models::{AllocationResult, Room, RoomId};
use crate::validation::check_unique_rooms;

/// Ordered, editable set of exam rooms.
///
/// # Example
///
/// ```
/// use u_seating::catalog::RoomCatalog;
///
/// let mut catalog = RoomCatalog::new();
/// let a = catalog.add("Room A", 5, 6).unwrap();
/// catalog.add("Room B", 4, 8).unwrap();
/// catalog.update(a.id(), "Room A (annex)", 5, 7).unwrap();
///
/// let names: Vec<_> = catalog.list().iter().map(|r| r.name().to_string()).collect();
/// assert_eq!(names, ["Room A (annex)", "Room B"]);
/// assert_eq!(catalog.total_capacity(), 67);
/// ```
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    /// `None` once `RoomId(u64::MAX)` has been taken.
    next_id: Option<u64>,
    revision: u64,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            next_id: Some(0),
            revision: 0,
        }
    }
}

impl RoomCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a catalog from an externally fetched room list, keeping its order.
    ///
    /// # Errors
    /// `DuplicateRoom` if two rooms share an id.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self> {
        check_unique_rooms(&rooms)?;
        let next_id = match rooms.iter().map(|r| r.id().0).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        Ok(Self {
            rooms,
            next_id,
            revision: 0,
        })
    }

    /// Adds a room at the end of the catalog.
    ///
    /// # Errors
    /// `Validation` for a blank name or an unsupported shape,
    /// `RoomIdExhausted` once no id is left to assign.
    pub fn add(&mut self, name: impl Into<String>, rows: u32, cols: u32) -> Result<Room> {
        let id = self.next_id.ok_or(SeatingError::RoomIdExhausted)?;
        let room = Room::new(RoomId(id), name, rows, cols)?;
        self.next_id = id.checked_add(1);
        self.rooms.push(room.clone());
        self.touch();
        info!(room_id = %room.id(), name = room.name(), rows, cols, "room added");
        Ok(room)
    }

    /// Replaces a room's name and shape in place.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `Validation` for bad fields.
    pub fn update(
        &mut self,
        id: RoomId,
        name: impl Into<String>,
        rows: u32,
        cols: u32,
    ) -> Result<Room> {
        let slot = self
            .rooms
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| SeatingError::room_not_found(id))?;
        let room = slot.replaced(name, rows, cols)?;
        *slot = room.clone();
        self.touch();
        info!(room_id = %id, name = room.name(), rows, cols, "room updated");
        Ok(room)
    }

    /// Deletes a room.
    ///
    /// # Errors
    /// `NotFound` for an unknown id.
    pub fn remove(&mut self, id: RoomId) -> Result<()> {
        let idx = self
            .rooms
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| SeatingError::room_not_found(id))?;
        self.rooms.remove(idx);
        self.touch();
        info!(room_id = %id, "room removed");
        Ok(())
    }

    /// Snapshot of all rooms in catalog order.
    pub fn list(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    /// Snapshot of one room.
    pub fn get(&self, id: RoomId) -> Option<Room> {
        self.rooms.iter().find(|r| r.id() == id).cloned()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Sum of all room capacities.
    pub fn total_capacity(&self) -> usize {
        self.rooms.iter().map(Room::capacity).sum()
    }

    /// Edit counter; increases on every successful add, update, or remove.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `result` no longer reflects this catalog.
    ///
    /// Stale when the revision differs or when the result's rooms (id,
    /// name, shape, order) differ from the current ones. Results not
    /// generated from a catalog carry no revision and are always stale.
    pub fn is_stale(&self, result: &AllocationResult) -> bool {
        if result.catalog_revision() != Some(self.revision) {
            return true;
        }
        result.rooms().len() != self.rooms.len()
            || result
                .rooms()
                .iter()
                .zip(&self.rooms)
                .any(|(alloc, room)| !alloc.matches_room(room))
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
