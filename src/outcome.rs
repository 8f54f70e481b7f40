//! Values every command resolves to.
//!
//! A command never aborts the interpreter: it either succeeds with a
//! [`Report`] or is turned down with a [`Rejection`]. Both sides render to the
//! operator-facing message through `Display`.

use crate::parser::ParsingError;
use std::fmt;
use thiserror::Error;

/// Result of executing a single command.
pub type Outcome = Result<Report, Rejection>;

/// A successful command and whatever it has to tell the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    ClassroomCreated(String),
    ClassroomRemoved(String),
    /// Classroom names in directory order. Empty when there are none.
    Classrooms(Vec<String>),
    StudentEnrolled {
        student_id: String,
        class_name: String,
    },
    /// Student ids of `class_name` in enrollment order.
    Roster {
        class_name: String,
        student_ids: Vec<String>,
    },
    AssignmentScheduled(String),
    AssignmentSubmitted {
        student_id: String,
        class_name: String,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::ClassroomCreated(name) => write!(f, "Classroom {} has been created.", name),
            Report::ClassroomRemoved(name) => write!(f, "Classroom {} has been removed.", name),
            Report::Classrooms(names) if names.is_empty() => {
                write!(f, "No classrooms available.")
            }
            Report::Classrooms(names) => {
                write_lines(f, names.iter().map(|n| format!("Classroom: {}", n)))
            }
            Report::StudentEnrolled {
                student_id,
                class_name,
            } => write!(
                f,
                "Student {} has been enrolled in {}.",
                student_id, class_name
            ),
            Report::Roster {
                class_name,
                student_ids,
            } if student_ids.is_empty() => write!(f, "No students enrolled in {}.", class_name),
            Report::Roster { student_ids, .. } => {
                write_lines(f, student_ids.iter().map(|id| format!("Student ID: {}", id)))
            }
            Report::AssignmentScheduled(class_name) => {
                write!(f, "Assignment for {} has been scheduled.", class_name)
            }
            Report::AssignmentSubmitted {
                student_id,
                class_name,
            } => write!(
                f,
                "Assignment submitted by Student {} in {}.",
                student_id, class_name
            ),
        }
    }
}

fn write_lines(f: &mut fmt::Formatter<'_>, lines: impl Iterator<Item = String>) -> fmt::Result {
    for (i, line) in lines.enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        f.write_str(&line)?;
    }
    Ok(())
}

/// Why a command was turned down. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Classroom {0} already exists.")]
    ClassroomExists(String),

    #[error("Classroom {0} does not exist.")]
    ClassroomMissing(String),

    /// Nothing matched the details, or every match was already submitted.
    /// The two causes are reported the same way.
    #[error("Assignment not found or already submitted.")]
    SubmissionMissed,

    #[error(transparent)]
    Malformed(#[from] ParsingError),
}
