//! Seating domain models.
//!
//! Strict record types validated at the catalog boundary, so the
//! allocation algorithm never sees a malformed room.
//!
//! # Domain Mappings
//!
//! | u-seating | Campus portal | Scheduling |
//! |-----------|---------------|------------|
//! | Room | Exam hall | Resource with grid capacity |
//! | Student | Approved registrant | Task |
//! | SeatAssignment | Hall-ticket seat | Assignment |
//! | AllocationResult | Seating plan | Schedule |

mod allocation;
mod room;
mod student;

pub use allocation::{AllocationResult, RoomAllocation, SeatAssignment, StudentPlacement};
pub use room::{Room, RoomId};
pub use student::Student;
