//! Seat allocation engine and allocation statistics.
//!
//! # Algorithm
//!
//! `SequentialAllocator` walks rooms in catalog order and carves the roster,
//! in registration order, into consecutive slices. Room `k` of `N` receives
//! `ceil(remaining / (N - k))` students, truncated to its capacity, seated
//! row-major from `A1`. Overflow is never redistributed; leftover students
//! make the result partial.
//!
//! # Stats
//!
//! `SeatingStats` summarizes a result: roster size, seats, placed and
//! unplaced counts, and fill rates.

mod sequential;
mod stats;

pub use sequential::SequentialAllocator;
pub use stats::SeatingStats;
