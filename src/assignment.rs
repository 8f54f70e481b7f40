//! Scheduling and submitting assignments.
//!
//! Every assignment goes `Scheduled -> Submitted` exactly once. Several
//! assignments may share the same details; submission always picks the
//! earliest one that is still open.

use crate::model::{Assignment, Classroom};
use crate::outcome::{Outcome, Rejection, Report};

/// Append a new unsubmitted assignment to the classroom.
pub fn schedule(class_name: &str, classroom: &mut Classroom, details: &str) -> Report {
    classroom.add_assignment(Assignment::new(details));
    Report::AssignmentScheduled(class_name.to_string())
}

/// Submit the first open assignment whose details equal `details`.
pub fn submit(
    student_id: &str,
    class_name: &str,
    classroom: &mut Classroom,
    details: &str,
) -> Outcome {
    let open = classroom
        .assignments_mut()
        .iter_mut()
        .find(|a| a.details() == details && !a.is_submitted());

    match open {
        Some(assignment) => {
            assignment.submit();
            Ok(Report::AssignmentSubmitted {
                student_id: student_id.to_string(),
                class_name: class_name.to_string(),
            })
        }
        None => Err(Rejection::SubmissionMissed),
    }
}
