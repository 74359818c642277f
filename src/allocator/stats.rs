//! Allocation statistics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Students registered | Roster size at generation |
//! | Rooms available | Rooms in the result |
//! | Total seats | Sum of room capacities |
//! | Placed / Unplaced | Seated vs. left-over students |
//! | Fill rate | placed / total seats |

use crate::models::{AllocationResult, RoomId};

/// Summary figures for an allocation result.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingStats {
    /// Roster size.
    pub students_registered: usize,
    /// Number of rooms.
    pub rooms_available: usize,
    /// Sum of room capacities.
    pub total_seats: usize,
    /// Students seated.
    pub placed: usize,
    /// Students without a seat.
    pub unplaced: usize,
    /// Overall fill rate (0.0..1.0).
    pub fill_rate: f64,
    /// Per-room fill rate, in catalog order.
    pub fill_by_room: Vec<(RoomId, f64)>,
}

impl SeatingStats {
    /// Computes stats from a result.
    pub fn calculate(result: &AllocationResult) -> Self {
        let total_seats: usize = result.rooms().iter().map(|r| r.capacity()).sum();
        let placed = result.total_placed();

        let fill_by_room = result
            .rooms()
            .iter()
            .map(|r| (r.room_id(), ratio(r.placed(), r.capacity())))
            .collect();

        Self {
            students_registered: result.roster_size(),
            rooms_available: result.rooms().len(),
            total_seats,
            placed,
            unplaced: result.unplaced_count(),
            fill_rate: ratio(placed, total_seats),
            fill_by_room,
        }
    }

    /// Whether everyone was seated.
    pub fn is_complete(&self) -> bool {
        self.unplaced == 0
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
