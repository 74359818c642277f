//! Roster provider.
//!
//! The approved-student roster is owned by an external store. The
//! allocator reads it through [`RosterProvider`] as an ordered snapshot:
//! registration order, oldest first, never re-sorted.

use crate::models::Student;

/// Source of the ordered approved-student roster.
pub trait RosterProvider {
    /// Snapshot of students in registration order.
    fn students(&self) -> Vec<Student>;
}

/// In-memory roster snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a newly approved student.
    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Adds a student (builder form).
    pub fn with_student(mut self, student: Student) -> Self {
        self.push(student);
        self
    }

    /// Finds a student by id.
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Students in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl From<Vec<Student>> for Roster {
    fn from(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl RosterProvider for Roster {
    fn students(&self) -> Vec<Student> {
        self.students.clone()
    }
}

impl RosterProvider for [Student] {
    fn students(&self) -> Vec<Student> {
        self.to_vec()
    }
}

impl RosterProvider for Vec<Student> {
    fn students(&self) -> Vec<Student> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_keeps_order() {
        let roster = Roster::new()
            .with_student(Student::new("S3", "Chen"))
            .with_student(Student::new("S1", "Asha"))
            .with_student(Student::new("S2", "Ben"));
        let ids: Vec<_> = roster.students().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_find() {
        let roster: Roster = vec![Student::new("S1", "Asha"), Student::new("S2", "Ben")].into();
        assert_eq!(roster.find("S2").unwrap().display_name, "Ben");
        assert!(roster.find("S9").is_none());
    }

    #[test]
    fn test_snapshot_independent_of_later_pushes() {
        let mut roster = Roster::new();
        roster.push(Student::new("S1", "Asha"));
        let snap = roster.students();
        roster.push(Student::new("S2", "Ben"));
        assert_eq!(snap.len(), 1);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_collect_and_slice_provider() {
        let roster: Roster = (1..=3)
            .map(|i| Student::new(format!("S{i}"), format!("Student {i}")))
            .collect();
        assert!(!roster.is_empty());
        let v: Vec<Student> = roster.iter().cloned().collect();
        assert_eq!(v.students(), roster.students());
        assert_eq!(v[..2].students().len(), 2);
    }
}
