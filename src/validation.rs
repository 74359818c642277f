//! Input validation at the catalog and roster boundaries.
//!
//! Rooms are checked when they enter the catalog (or are deserialized),
//! rosters when a generation run starts. The allocation algorithm itself
//! assumes well-formed input. Detects:
//! - Empty room names
//! - Zero dimensions
//! - Row counts beyond the seat-label alphabet
//! - Duplicate room IDs in a seeded catalog
//! - Duplicate student IDs in a roster

use std::collections::HashSet;

use crate::error::{Result, SeatingError};
use crate::grid::MAX_ROWS;
use crate::models::{Room, Student};

/// Checks the user-editable fields of a room.
///
/// # Errors
/// `Validation` naming the first offending field.
pub fn check_room_fields(name: &str, rows: u32, cols: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SeatingError::validation("name", "must not be empty"));
    }
    if rows < 1 {
        return Err(SeatingError::validation("rows", "must be at least 1"));
    }
    if rows > MAX_ROWS {
        return Err(SeatingError::validation(
            "rows",
            format!("must be at most {MAX_ROWS} (seat rows are lettered A-Z)"),
        ));
    }
    if cols < 1 {
        return Err(SeatingError::validation("cols", "must be at least 1"));
    }
    Ok(())
}

/// Rejects a room list in which two rooms share an id.
pub fn check_unique_rooms(rooms: &[Room]) -> Result<()> {
    let mut seen = HashSet::new();
    for room in rooms {
        if !seen.insert(room.id()) {
            return Err(SeatingError::DuplicateRoom(room.id()));
        }
    }
    Ok(())
}

/// Rejects a roster in which a student id appears twice.
pub fn check_roster(students: &[Student]) -> Result<()> {
    let mut seen = HashSet::new();
    for s in students {
        if !seen.insert(s.id.as_str()) {
            return Err(SeatingError::DuplicateStudent(s.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomId;

    fn field_of(err: SeatingError) -> String {
        match err {
            SeatingError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_room_fields() {
        assert!(check_room_fields("Hall A", 5, 6).is_ok());
        assert!(check_room_fields("Z", 26, 1).is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(field_of(check_room_fields("", 1, 1).unwrap_err()), "name");
        assert_eq!(field_of(check_room_fields("   ", 1, 1).unwrap_err()), "name");
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(field_of(check_room_fields("R", 0, 3).unwrap_err()), "rows");
        assert_eq!(field_of(check_room_fields("R", 3, 0).unwrap_err()), "cols");
    }

    #[test]
    fn test_too_many_rows() {
        let err = check_room_fields("Auditorium", 27, 10).unwrap_err();
        assert!(err.to_string().contains("at most 26"));
    }

    #[test]
    fn test_duplicate_rooms() {
        let rooms = vec![
            Room::new(RoomId(1), "A", 1, 1).unwrap(),
            Room::new(RoomId(2), "B", 1, 1).unwrap(),
            Room::new(RoomId(1), "C", 1, 1).unwrap(),
        ];
        assert_eq!(
            check_unique_rooms(&rooms).unwrap_err(),
            SeatingError::DuplicateRoom(RoomId(1))
        );
        assert!(check_unique_rooms(&rooms[..2]).is_ok());
    }

    #[test]
    fn test_duplicate_students() {
        let students = vec![
            Student::new("S1", "Asha"),
            Student::new("S2", "Ben"),
            Student::new("S1", "Asha again"),
        ];
        assert_eq!(
            check_roster(&students).unwrap_err(),
            SeatingError::DuplicateStudent("S1".into())
        );
        assert!(check_roster(&students[..2]).is_ok());
        assert!(check_roster(&[]).is_ok());
    }
}
