/// A named classroom owning its roster and its assignments.
///
/// Both sequences keep insertion order: the roster is listed in enrollment
/// order and submission matches assignments in schedule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    name: String,
    students: Vec<Student>,
    assignments: Vec<Assignment>,
}

impl Classroom {
    /// Create an empty classroom.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignments_mut(&mut self) -> &mut [Assignment] {
        &mut self.assignments
    }

    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }
}

/// A student record. Ids are compared by string equality only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
}

impl Student {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Lifecycle of an assignment. `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentState {
    #[default]
    Scheduled,
    Submitted,
}

/// An assignment identified within its classroom by its free-text details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    details: String,
    state: AssignmentState,
}

impl Assignment {
    /// Create a freshly scheduled (unsubmitted) assignment.
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
            state: AssignmentState::Scheduled,
        }
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn state(&self) -> AssignmentState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == AssignmentState::Submitted
    }

    /// Move the assignment to `Submitted`.
    ///
    /// Returns `false` and leaves the assignment untouched if it was already
    /// submitted.
    pub fn submit(&mut self) -> bool {
        match self.state {
            AssignmentState::Scheduled => {
                self.state = AssignmentState::Submitted;
                true
            }
            AssignmentState::Submitted => false,
        }
    }
}
