use crate::model::Classroom;
use crate::outcome::{Outcome, Rejection, Report};
use std::collections::BTreeMap;

/// The set of classrooms known to a session, keyed by unique name.
///
/// The directory is an ordinary value: whoever drives the session constructs
/// one and passes it around explicitly. Names are kept sorted, so [`list`]
/// yields the same order every time until the directory changes.
///
/// [`list`]: ClassroomDirectory::list
#[derive(Debug, Default, Clone)]
pub struct ClassroomDirectory {
    classrooms: BTreeMap<String, Classroom>,
}

impl ClassroomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new empty classroom under `name`.
    ///
    /// An existing classroom with the same name is left untouched and the
    /// request is rejected.
    pub fn create(&mut self, name: &str) -> Outcome {
        if self.classrooms.contains_key(name) {
            return Err(Rejection::ClassroomExists(name.to_string()));
        }
        self.classrooms.insert(name.to_string(), Classroom::new(name));
        Ok(Report::ClassroomCreated(name.to_string()))
    }

    pub fn lookup(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Classroom> {
        self.classrooms.get_mut(name)
    }

    /// Delete the classroom together with its roster and assignments.
    pub fn remove(&mut self, name: &str) -> Outcome {
        match self.classrooms.remove(name) {
            Some(_) => Ok(Report::ClassroomRemoved(name.to_string())),
            None => Err(Rejection::ClassroomMissing(name.to_string())),
        }
    }

    /// Classroom names in sorted order.
    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.classrooms.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classrooms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_duplicate_is_rejected() {
        let mut dir = ClassroomDirectory::new();

        assert_eq!(
            dir.create("Math"),
            Ok(Report::ClassroomCreated("Math".to_string()))
        );
        for _ in 0..3 {
            assert_eq!(
                dir.create("Math"),
                Err(Rejection::ClassroomExists("Math".to_string()))
            );
        }
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.list().filter(|n| *n == "Math").count(), 1);
    }

    #[test]
    fn test_duplicate_create_keeps_existing_contents() {
        let mut dir = ClassroomDirectory::new();
        dir.create("Math").unwrap();
        let math = dir.lookup_mut("Math").unwrap();
        math.add_student(crate::model::Student::new("S1"));

        assert!(dir.create("Math").is_err());
        assert_eq!(dir.lookup("Math").unwrap().students().len(), 1);
    }

    #[test]
    fn test_lookup_absent_is_none() {
        let dir = ClassroomDirectory::new();
        assert!(dir.lookup("Nope").is_none());
        assert!(!dir.contains("Nope"));
    }

    #[test]
    fn test_remove() {
        let mut dir = ClassroomDirectory::new();
        dir.create("Math").unwrap();

        assert_eq!(
            dir.remove("Math"),
            Ok(Report::ClassroomRemoved("Math".to_string()))
        );
        assert!(dir.is_empty());
        assert_eq!(
            dir.remove("Math"),
            Err(Rejection::ClassroomMissing("Math".to_string()))
        );

        // the name is free again
        assert!(dir.create("Math").is_ok());
    }

    #[test]
    fn test_list_is_stable_and_restartable() {
        let mut dir = ClassroomDirectory::new();
        for name in ["Physics", "Art", "Math"] {
            dir.create(name).unwrap();
        }

        let first: Vec<&str> = dir.list().collect();
        let second: Vec<&str> = dir.list().collect();
        assert_eq!(first, vec!["Art", "Math", "Physics"]);
        assert_eq!(first, second);
    }
}
