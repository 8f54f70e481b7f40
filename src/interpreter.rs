use crate::assignment;
use crate::directory::ClassroomDirectory;
use crate::enrollment;
use crate::model::Classroom;
use crate::outcome::{Outcome, Rejection, Report};
use crate::parser::{self, Command};
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// What the driving loop should do after a line has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Show the message to the operator and read the next line.
    Continue(String),
    /// The operator asked to leave.
    Exit,
}

/// Line-at-a-time command interpreter for the classroom manager.
///
/// The interpreter owns the [`ClassroomDirectory`] and therefore every
/// classroom, student and assignment of the session. Each call to
/// [`execute`](Interpreter::execute) fully processes one line before
/// returning, and no failure ever leaves the interpreter unusable.
///
/// Example
/// ```
/// use virtual_classroom::{Interpreter, Step};
/// let mut session = Interpreter::default();
/// assert_eq!(
///     session.execute("add_classroom Math"),
///     Step::Continue("Classroom Math has been created.".to_string())
/// );
/// assert_eq!(session.execute("exit"), Step::Exit);
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    directory: ClassroomDirectory,
}

impl Interpreter {
    pub fn directory(&self) -> &ClassroomDirectory {
        &self.directory
    }

    /// Give the directory back, e.g. to inspect it after a session.
    pub fn into_directory(self) -> ClassroomDirectory {
        self.directory
    }

    /// Parse and execute a single command line.
    pub fn execute(&mut self, line: &str) -> Step {
        let outcome = match parser::parse_command(line) {
            Ok(command) => match self.dispatch(command) {
                Some(outcome) => outcome,
                None => return Step::Exit,
            },
            Err(err) => Err(Rejection::from(err)),
        };

        match outcome {
            Ok(report) => Step::Continue(report.to_string()),
            Err(rejection) => {
                debug!(%rejection, "command rejected");
                Step::Continue(rejection.to_string())
            }
        }
    }

    /// Execute an already parsed command against the directory.
    ///
    /// Returns `None` for [`Command::Exit`], which touches no state.
    pub fn dispatch(&mut self, command: Command) -> Option<Outcome> {
        debug!(command = command.name(), "dispatching");
        let outcome = match command {
            Command::Exit => return None,
            Command::AddClassroom { name } => self.directory.create(&name),
            Command::RemoveClassroom { name } => self.directory.remove(&name),
            Command::ListClassrooms => Ok(Report::Classrooms(
                self.directory.list().map(str::to_string).collect(),
            )),
            Command::AddStudent {
                student_id,
                class_name,
            } => self
                .classroom_mut(&class_name)
                .map(|classroom| enrollment::enroll(&student_id, classroom)),
            Command::ListStudents { class_name } => match self.directory.lookup(&class_name) {
                Some(classroom) => Ok(Report::Roster {
                    student_ids: enrollment::roster(classroom).map(str::to_string).collect(),
                    class_name,
                }),
                None => Err(Rejection::ClassroomMissing(class_name)),
            },
            Command::ScheduleAssignment {
                class_name,
                details,
            } => self
                .classroom_mut(&class_name)
                .map(|classroom| assignment::schedule(&class_name, classroom, &details)),
            Command::SubmitAssignment {
                student_id,
                class_name,
                details,
            } => self.classroom_mut(&class_name).and_then(|classroom| {
                assignment::submit(&student_id, &class_name, classroom, &details)
            }),
        };
        Some(outcome)
    }

    fn classroom_mut(&mut self, class_name: &str) -> Result<&mut Classroom, Rejection> {
        self.directory
            .lookup_mut(class_name)
            .ok_or_else(|| Rejection::ClassroomMissing(class_name.to_string()))
    }

    /// Drive the interpreter from any line source until `exit` or end of input.
    ///
    /// Every message is written to `output` followed by a newline. Bytes that
    /// are not valid UTF-8 are replaced with U+FFFD, so such a line still
    /// yields exactly one message.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read command line")?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            match self.execute(&line) {
                Step::Continue(message) => {
                    writeln!(output, "{}", message).context("failed to write message")?
                }
                Step::Exit => break,
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Interactive Read-Eval-Print Loop on top of `rustyline`.
    ///
    /// Ctrl-C and Ctrl-D end the session just like `exit`.
    pub fn repl(&mut self, prompt: &str) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    match self.execute(&line) {
                        Step::Continue(message) => println!("{}", message),
                        Step::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    info!("interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    info!("end of input");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(step: Step) -> String {
        match step {
            Step::Continue(message) => message,
            Step::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut sh = Interpreter::default();
        let script = [
            ("add_classroom Math", "Classroom Math has been created."),
            ("add_student S1 Math", "Student S1 has been enrolled in Math."),
            ("schedule_assignment Math HW1", "Assignment for Math has been scheduled."),
            ("submit_assignment S1 Math HW1", "Assignment submitted by Student S1 in Math."),
            ("submit_assignment S1 Math HW1", "Assignment not found or already submitted."),
        ];
        for (line, expected) in script {
            assert_eq!(message(sh.execute(line)), expected, "line: {}", line);
        }
    }

    #[test]
    fn test_missing_classroom_is_never_created() {
        let mut sh = Interpreter::default();
        for line in [
            "add_student S1 Ghost",
            "schedule_assignment Ghost HW1",
            "submit_assignment S1 Ghost HW1",
            "list_students Ghost",
            "remove_classroom Ghost",
        ] {
            assert_eq!(message(sh.execute(line)), "Classroom Ghost does not exist.");
        }
        assert!(sh.directory().is_empty());
    }

    #[test]
    fn test_malformed_lines_do_not_mutate() {
        let mut sh = Interpreter::default();
        assert_eq!(
            message(sh.execute("add_classroom")),
            "Invalid input. Usage: add_classroom <class_name>"
        );
        assert_eq!(
            message(sh.execute("add_classroom Math Physics")),
            "Invalid input. Usage: add_classroom <class_name>"
        );
        assert_eq!(message(sh.execute("enroll S1 Math")), "Invalid command.");
        assert_eq!(message(sh.execute("")), "Invalid command.");
        assert!(sh.directory().is_empty());

        // the session goes on
        assert_eq!(
            message(sh.execute("add_classroom Math")),
            "Classroom Math has been created."
        );
    }

    #[test]
    fn test_duplicate_classroom() {
        let mut sh = Interpreter::default();
        sh.execute("add_classroom Math");
        assert_eq!(
            message(sh.execute("add_classroom Math")),
            "Classroom Math already exists."
        );
        assert_eq!(sh.directory().len(), 1);
    }

    #[test]
    fn test_listings() {
        let mut sh = Interpreter::default();
        assert_eq!(message(sh.execute("list_classrooms")), "No classrooms available.");

        sh.execute("add_classroom Math");
        sh.execute("add_classroom Art");
        assert_eq!(
            message(sh.execute("list_classrooms")),
            "Classroom: Art\nClassroom: Math"
        );
        assert_eq!(
            message(sh.execute("list_students Math")),
            "No students enrolled in Math."
        );

        sh.execute("add_student S1 Math");
        sh.execute("add_student S1 Math");
        let first = message(sh.execute("list_students Math"));
        assert_eq!(first, "Student ID: S1\nStudent ID: S1");
        assert_eq!(message(sh.execute("list_students Math")), first);
    }

    #[test]
    fn test_remove_drops_roster_and_assignments() {
        let mut sh = Interpreter::default();
        sh.execute("add_classroom Math");
        sh.execute("add_student S1 Math");
        sh.execute("schedule_assignment Math HW1");

        assert_eq!(
            message(sh.execute("remove_classroom Math")),
            "Classroom Math has been removed."
        );
        assert_eq!(
            message(sh.execute("add_student S1 Math")),
            "Classroom Math does not exist."
        );

        sh.execute("add_classroom Math");
        assert_eq!(
            message(sh.execute("list_students Math")),
            "No students enrolled in Math."
        );
    }

    #[test]
    fn test_exit_keeps_state() {
        let mut sh = Interpreter::default();
        sh.execute("add_classroom Math");
        assert_eq!(sh.execute("exit"), Step::Exit);
        assert!(sh.into_directory().contains("Math"));
    }

    #[test]
    fn test_run_stops_at_exit() {
        let mut sh = Interpreter::default();
        let input = "add_classroom Math\nbogus\nexit\nadd_classroom Art\n";
        let mut out: Vec<u8> = Vec::new();

        sh.run(input.as_bytes(), &mut out).unwrap();

        let s = String::from_utf8(out).expect("utf8");
        assert_eq!(s, "Classroom Math has been created.\nInvalid command.\n");
        assert!(!sh.directory().contains("Art"));
    }
}
