//! Sequential ceiling-split seat allocator.
//!
//! # Algorithm
//!
//! 1. Reject an empty roster, an empty room list, or duplicate student IDs.
//! 2. Keep a cursor into the roster, starting at 0.
//! 3. For room `k` of `N`, compute `share = ceil(remaining / (N - k))`.
//! 4. Seat the next `min(share, capacity, remaining)` students on the room's
//!    seat labels in order, then advance the cursor by that count.
//! 5. Students still unseated after the last room are reported through the
//!    result's counts, or rejected up front under `OverflowPolicy::Reject`.
//!
//! The split is recomputed per room from what is left, so it differs from
//! a single `total / rooms` division whenever the division is inexact
//! (7 students over 3 rooms gives 3, 2, 2).
//!
//! # Complexity
//! O(s + t) where s=students, t=total seats.

use tracing::{debug, info, warn};

use crate::catalog::RoomCatalog;
use crate::config::{OverflowPolicy, SeatingConfig};
use crate::error::{Result, SeatingError};
use crate::models::{AllocationResult, Room, RoomAllocation, SeatAssignment, Student};
use crate::roster::RosterProvider;
use crate::validation::check_roster;

/// Deterministic seat allocator.
///
/// Output depends only on the two ordered inputs and the configuration:
/// identical inputs always produce equal results.
///
/// # Example
///
/// ```
/// use u_seating::allocator::SequentialAllocator;
/// use u_seating::catalog::RoomCatalog;
/// use u_seating::models::Student;
///
/// let mut catalog = RoomCatalog::new();
/// let a = catalog.add("Room A", 5, 1).unwrap();
/// catalog.add("Room B", 5, 1).unwrap();
///
/// let roster: Vec<Student> = (0..10)
///     .map(|i| Student::new(format!("S{i}"), format!("Student {i}")))
///     .collect();
///
/// let result = SequentialAllocator::new().generate_from(&catalog, &roster).unwrap();
/// assert_eq!(result.room_allocation(a.id()).unwrap().placed(), 5);
/// assert_eq!(result.student_allocation("S5").unwrap().seat_label, "A1");
/// assert!(!catalog.is_stale(&result));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialAllocator {
    config: SeatingConfig,
}

impl SequentialAllocator {
    /// Creates an allocator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SeatingConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Allocates `students` to `rooms`, both in their given order.
    ///
    /// # Errors
    /// - `EmptyRoster` if `students` is empty.
    /// - `NoCapacity` if `rooms` is empty.
    /// - `DuplicateStudent` if a student ID repeats.
    /// - `InsufficientCapacity` if seats run short under `OverflowPolicy::Reject`.
    pub fn generate(&self, rooms: &[Room], students: &[Student]) -> Result<AllocationResult> {
        if students.is_empty() {
            return Err(SeatingError::EmptyRoster);
        }
        if rooms.is_empty() {
            return Err(SeatingError::NoCapacity);
        }
        check_roster(students)?;

        let available: usize = rooms.iter().map(Room::capacity).sum();
        if self.config.overflow_policy == OverflowPolicy::Reject && available < students.len() {
            return Err(SeatingError::InsufficientCapacity {
                required: students.len(),
                available,
            });
        }

        let room_count = rooms.len();
        let mut cursor = 0;
        let mut allocations = Vec::with_capacity(room_count);

        for (k, room) in rooms.iter().enumerate() {
            let remaining = students.len() - cursor;
            let share = remaining.div_ceil(room_count - k);
            let take = share.min(room.capacity()).min(remaining);

            let seats: Vec<SeatAssignment> = students[cursor..cursor + take]
                .iter()
                .zip(room.seat_labels())
                .map(|(student, label)| self.seat(student, label))
                .collect();
            cursor += seats.len();

            debug!(
                room_id = %room.id(),
                share,
                capacity = room.capacity(),
                placed = seats.len(),
                "room filled"
            );

            allocations.push(RoomAllocation::new(
                room.id(),
                room.name(),
                format!("{}-{k}", self.config.session),
                room.rows(),
                room.cols(),
                seats,
            ));
        }

        let unplaced = students.len() - cursor;
        if unplaced > 0 {
            warn!(
                roster = students.len(),
                placed = cursor,
                unplaced,
                "incomplete allocation: rooms could not absorb their share"
            );
        }
        info!(
            rooms = room_count,
            roster = students.len(),
            placed = cursor,
            "seating plan generated"
        );

        Ok(AllocationResult::new(allocations, students.len()))
    }

    /// Snapshots the catalog and roster, allocates, and stamps the result
    /// with the catalog revision for stale detection.
    pub fn generate_from<R>(&self, catalog: &RoomCatalog, roster: &R) -> Result<AllocationResult>
    where
        R: RosterProvider + ?Sized,
    {
        let revision = catalog.revision();
        let rooms = catalog.list();
        let students = roster.students();
        self.generate(&rooms, &students)
            .map(|result| result.with_catalog_revision(revision))
    }

    fn seat(&self, student: &Student, seat_label: String) -> SeatAssignment {
        let subject = student
            .exam_subject
            .as_deref()
            .unwrap_or(self.config.default_exam_subject.as_str());
        SeatAssignment::new(&student.id, &student.display_name, subject, seat_label)
    }
}
