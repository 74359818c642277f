//! Seat grid addressing.
//!
//! A room of `rows × cols` seats is addressed row-major: row letters
//! `A..Z`, column numbers from 1. For a 2×3 room the order is
//! `A1 A2 A3 B1 B2 B3`. This order is the assignment order, not only
//! the display order.

/// Highest supported row count (one letter per row).
pub const MAX_ROWS: u32 = 26;

/// Label of the seat at zero-based `row`, `col`.
///
/// Returns `None` when `row` is past `Z`.
///
/// ```
/// use u_seating::grid::seat_label;
/// assert_eq!(seat_label(1, 2).as_deref(), Some("B3"));
/// assert_eq!(seat_label(26, 0), None);
/// ```
pub fn seat_label(row: u32, col: u32) -> Option<String> {
    if row >= MAX_ROWS {
        return None;
    }
    let letter = char::from(b'A' + row as u8);
    Some(format!("{letter}{}", col + 1))
}

/// All seat labels of a `rows × cols` room in row-major order.
///
/// Rows beyond `Z` are not addressable and are left out; the catalog
/// never admits such rooms.
///
/// ```
/// use u_seating::grid::seat_labels;
/// assert_eq!(seat_labels(2, 3), vec!["A1", "A2", "A3", "B1", "B2", "B3"]);
/// ```
pub fn seat_labels(rows: u32, cols: u32) -> Vec<String> {
    let rows = rows.min(MAX_ROWS);
    let mut labels = Vec::with_capacity(rows as usize * cols as usize);
    for r in 0..rows {
        for c in 0..cols {
            if let Some(label) = seat_label(r, c) {
                labels.push(label);
            }
        }
    }
    labels
}

/// Inverse of [`seat_label`]: `"B3"` → `(1, 2)`.
pub fn parse_seat_label(label: &str) -> Option<(u32, u32)> {
    let mut chars = label.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let col: u32 = digits.parse().ok()?;
    if col == 0 {
        return None;
    }
    Some((letter as u32 - 'A' as u32, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_three() {
        assert_eq!(seat_labels(2, 3), vec!["A1", "A2", "A3", "B1", "B2", "B3"]);
    }

    #[test]
    fn test_single_column() {
        assert_eq!(seat_labels(5, 1), vec!["A1", "B1", "C1", "D1", "E1"]);
    }

    #[test]
    fn test_count_and_uniqueness() {
        let labels = seat_labels(26, 12);
        assert_eq!(labels.len(), 312);
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
        assert_eq!(labels.last().map(String::as_str), Some("Z12"));
    }

    #[test]
    fn test_multi_digit_columns() {
        let labels = seat_labels(1, 12);
        assert_eq!(labels[9], "A10");
        assert_eq!(labels[11], "A12");
    }

    #[test]
    fn test_rows_past_z_truncated() {
        assert_eq!(seat_labels(30, 1).len(), 26);
        assert_eq!(seat_label(25, 0).as_deref(), Some("Z1"));
        assert_eq!(seat_label(26, 0), None);
    }

    #[test]
    fn test_empty_shape() {
        assert!(seat_labels(0, 4).is_empty());
        assert!(seat_labels(4, 0).is_empty());
    }

    #[test]
    fn test_parse_seat_label() {
        assert_eq!(parse_seat_label("A1"), Some((0, 0)));
        assert_eq!(parse_seat_label("B3"), Some((1, 2)));
        assert_eq!(parse_seat_label("Z12"), Some((25, 11)));
        assert_eq!(parse_seat_label("A0"), None);
        assert_eq!(parse_seat_label("a1"), None);
        assert_eq!(parse_seat_label("A"), None);
        assert_eq!(parse_seat_label("A1x"), None);
        assert_eq!(parse_seat_label(""), None);
    }

    #[test]
    fn test_parse_inverts_label() {
        for label in seat_labels(4, 11) {
            let (r, c) = parse_seat_label(&label).unwrap();
            assert_eq!(seat_label(r, c).unwrap(), label);
        }
    }
}
