//! Exam seating allocation for the U-Engine ecosystem.
//!
//! Assigns an ordered roster of approved students to the seats of an
//! ordered set of exam rooms. Allocation is deterministic: rooms are filled
//! in catalog order, students taken in registration order, seats in
//! row-major label order (`A1, A2, ..., B1, ...`).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Room`, `Student`, `AllocationResult`,
//!   `RoomAllocation`, `SeatAssignment`
//! - **`grid`**: Seat label addressing
//! - **`catalog`**: Editable room catalog with stale-result detection
//! - **`roster`**: Roster provider trait and in-memory roster
//! - **`allocator`**: `SequentialAllocator` and `SeatingStats`
//! - **`validation`**: Boundary checks for rooms and rosters
//! - **`config`**, **`error`**, **`logging`**: Ambient plumbing
//!
//! # Example
//!
//! ```
//! use u_seating::allocator::SequentialAllocator;
//! use u_seating::catalog::RoomCatalog;
//! use u_seating::models::Student;
//! use u_seating::roster::Roster;
//!
//! let mut catalog = RoomCatalog::new();
//! catalog.add("Room A", 2, 2).unwrap();
//!
//! let roster: Roster = (1..=5)
//!     .map(|i| Student::new(format!("S{i}"), format!("Student {i}")))
//!     .collect();
//!
//! let plan = SequentialAllocator::new().generate_from(&catalog, &roster).unwrap();
//! assert_eq!(plan.total_placed(), 4);
//! assert_eq!(plan.unplaced_count(), 1);
//! ```

pub mod allocator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod models;
pub mod roster;
pub mod validation;

pub use error::{Result, SeatingError};
