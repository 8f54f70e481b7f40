//! Attaching students to classrooms.

use crate::model::{Classroom, Student};
use crate::outcome::Report;

/// Append a new student record to the classroom's roster.
///
/// There is no duplicate check: enrolling the same id twice yields two
/// records.
pub fn enroll(student_id: &str, classroom: &mut Classroom) -> Report {
    classroom.add_student(Student::new(student_id));
    Report::StudentEnrolled {
        student_id: student_id.to_string(),
        class_name: classroom.name().to_string(),
    }
}

/// Student ids of the classroom in enrollment order.
pub fn roster(classroom: &Classroom) -> impl Iterator<Item = &str> + '_ {
    classroom.students().iter().map(Student::id)
}
