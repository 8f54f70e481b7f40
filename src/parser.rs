use thiserror::Error;

const ADD_CLASSROOM: &str = "add_classroom <class_name>";
const REMOVE_CLASSROOM: &str = "remove_classroom <class_name>";
const LIST_CLASSROOMS: &str = "list_classrooms";
const ADD_STUDENT: &str = "add_student <student_id> <class_name>";
const LIST_STUDENTS: &str = "list_students <class_name>";
const SCHEDULE_ASSIGNMENT: &str = "schedule_assignment <class_name> <assignment_details>";
const SUBMIT_ASSIGNMENT: &str =
    "submit_assignment <student_id> <class_name> <assignment_details>";
const EXIT: &str = "exit";

/// A well-formed operator command.
///
/// Produced by [`parse_command`]; the token count of every variant has
/// already been checked, so executing a `Command` never has to look at the
/// raw line again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add_classroom <class_name>`
    AddClassroom { name: String },
    /// `remove_classroom <class_name>`
    RemoveClassroom { name: String },
    /// `list_classrooms`
    ListClassrooms,
    /// `add_student <student_id> <class_name>`
    AddStudent {
        student_id: String,
        class_name: String,
    },
    /// `list_students <class_name>`
    ListStudents { class_name: String },
    /// `schedule_assignment <class_name> <assignment_details>`
    ScheduleAssignment { class_name: String, details: String },
    /// `submit_assignment <student_id> <class_name> <assignment_details>`
    SubmitAssignment {
        student_id: String,
        class_name: String,
        details: String,
    },
    /// `exit`
    Exit,
}

impl Command {
    /// The command word as typed by the operator.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddClassroom { .. } => "add_classroom",
            Command::RemoveClassroom { .. } => "remove_classroom",
            Command::ListClassrooms => "list_classrooms",
            Command::AddStudent { .. } => "add_student",
            Command::ListStudents { .. } => "list_students",
            Command::ScheduleAssignment { .. } => "schedule_assignment",
            Command::SubmitAssignment { .. } => "submit_assignment",
            Command::Exit => "exit",
        }
    }
}

/// Errors that can occur while turning a line into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    /// The line contained no tokens at all.
    #[error("Invalid command.")]
    EmptyLine,
    /// The first token is not a known command word.
    #[error("Invalid command.")]
    UnknownCommand(String),
    /// A known command word followed by too few or too many arguments.
    #[error("Invalid input. Usage: {usage}")]
    WrongArity {
        command: &'static str,
        usage: &'static str,
    },
}

struct CommandBuilder<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> CommandBuilder<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        CommandBuilder { tokens, pos: 0 }
    }

    fn consume(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Take all remaining tokens, which must be exactly `N`.
    fn args<const N: usize>(
        &mut self,
        command: &'static str,
        usage: &'static str,
    ) -> Result<[&'a str; N], ParsingError> {
        let rest = &self.tokens[self.pos..];
        let args = <[&'a str; N]>::try_from(rest)
            .map_err(|_| ParsingError::WrongArity { command, usage })?;
        self.pos = self.tokens.len();
        Ok(args)
    }

    fn build_command(mut self) -> Result<Command, ParsingError> {
        let name = self.consume().ok_or(ParsingError::EmptyLine)?;

        let command = match name {
            "add_classroom" => {
                let [class_name] = self.args::<1>("add_classroom", ADD_CLASSROOM)?;
                Command::AddClassroom {
                    name: class_name.to_string(),
                }
            }
            "remove_classroom" => {
                let [class_name] = self.args::<1>("remove_classroom", REMOVE_CLASSROOM)?;
                Command::RemoveClassroom {
                    name: class_name.to_string(),
                }
            }
            "list_classrooms" => {
                let [] = self.args::<0>("list_classrooms", LIST_CLASSROOMS)?;
                Command::ListClassrooms
            }
            "add_student" => {
                let [student_id, class_name] = self.args::<2>("add_student", ADD_STUDENT)?;
                Command::AddStudent {
                    student_id: student_id.to_string(),
                    class_name: class_name.to_string(),
                }
            }
            "list_students" => {
                let [class_name] = self.args::<1>("list_students", LIST_STUDENTS)?;
                Command::ListStudents {
                    class_name: class_name.to_string(),
                }
            }
            "schedule_assignment" => {
                let [class_name, details] =
                    self.args::<2>("schedule_assignment", SCHEDULE_ASSIGNMENT)?;
                Command::ScheduleAssignment {
                    class_name: class_name.to_string(),
                    details: details.to_string(),
                }
            }
            "submit_assignment" => {
                let [student_id, class_name, details] =
                    self.args::<3>("submit_assignment", SUBMIT_ASSIGNMENT)?;
                Command::SubmitAssignment {
                    student_id: student_id.to_string(),
                    class_name: class_name.to_string(),
                    details: details.to_string(),
                }
            }
            "exit" => {
                let [] = self.args::<0>("exit", EXIT)?;
                Command::Exit
            }
            other => return Err(ParsingError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

/// Split a command line into tokens.
///
/// Tokens are separated by runs of whitespace; there is no quoting or
/// escaping, so an argument can never contain a space.
pub fn split_into_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse one command line into a [`Command`].
///
/// # Errors
///
/// * [`ParsingError::EmptyLine`] for a blank line.
/// * [`ParsingError::UnknownCommand`] if the first token is not a command word.
/// * [`ParsingError::WrongArity`] if a known command has the wrong number of
///   arguments. Its message carries the usage of that command.
pub fn parse_command(line: &str) -> Result<Command, ParsingError> {
    CommandBuilder::from(split_into_tokens(line)).build_command()
}
