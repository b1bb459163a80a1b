//! Line-oriented interactive roster session.
//!
//! # Responsibility
//! - Parse one command per input line.
//! - Drive the editor and delete dialogs of a `RosterApp` from prompts.
//!
//! # Invariants
//! - Every roster mutation goes through `RosterApp`.
//! - End of input ends the session; an open dialog is cancelled first.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use roster_core::{
    format_date, render_table, AppError, Employee, EmployeeId, EmployeeRepository, FormField,
    IdGenerator, MutationOutcome, RosterApp,
};
use thiserror::Error;

const PROMPT: &str = "> ";
const CONFIRM_PROMPT: &str = "Delete? [y/N] ";

const HELP: &str = "\
Commands:
  list              show the visible roster
  search <text>     filter by name, email, position or department
  clear             reset the search
  add               add a new employee
  edit <id>         edit an employee
  delete <id>       delete an employee (asks for confirmation)
  show <id>         show every field of one employee
  help              show this help
  quit              leave the session";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command `{0}`; type `help` for the command list")]
    Unknown(String),
    #[error("`{0}` needs an employee id")]
    MissingArgument(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Clear,
    Add,
    Edit(EmployeeId),
    Delete(EmployeeId),
    Show(EmployeeId),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line. `search` keeps the rest of the line verbatim.
    ///
    /// # Errors
    /// - `Unknown` for an unrecognised command word.
    /// - `MissingArgument` when `edit`, `delete` or `show` lacks an id.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        let with_id = |name: &'static str| {
            let id = rest.trim();
            if id.is_empty() {
                Err(ShellError::MissingArgument(name))
            } else {
                Ok(EmployeeId::from(id))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "search" | "find" => Ok(Self::Search(rest.to_string())),
            "clear" => Ok(Self::Clear),
            "add" | "new" => Ok(Self::Add),
            "edit" => with_id("edit").map(Self::Edit),
            "delete" | "rm" => with_id("delete").map(Self::Delete),
            "show" => with_id("show").map(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::Unknown(other.to_string())),
        }
    }
}

/// Interactive session over any line reader and writer.
pub struct Shell<'a, R, G, I, O>
where
    R: EmployeeRepository,
    G: IdGenerator,
{
    app: &'a mut RosterApp<R, G>,
    input: I,
    output: O,
}

impl<'a, R, G, I, O> Shell<'a, R, G, I, O>
where
    R: EmployeeRepository,
    G: IdGenerator,
    I: BufRead,
    O: Write,
{
    pub fn new(app: &'a mut RosterApp<R, G>, input: I, output: O) -> Self {
        Self { app, input, output }
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    /// Returns I/O errors from the underlying reader or writer.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=shell_start module=cli status=ok");
        writeln!(self.output, "Employee Management")?;
        writeln!(self.output, "Manage your team members and their information")?;
        writeln!(self.output)?;
        self.print_table()?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            if !self.execute(command)? {
                break;
            }
            self.print_notifications()?;
        }

        info!("event=shell_stop module=cli status=ok");
        Ok(())
    }

    /// Executes one command; returns `false` when the session should end.
    fn execute(&mut self, command: ShellCommand) -> io::Result<bool> {
        match command {
            ShellCommand::List => self.print_table()?,
            ShellCommand::Search(text) => {
                self.app.set_search_query(text);
                self.print_table()?;
            }
            ShellCommand::Clear => {
                self.app.set_search_query(String::new());
                self.print_table()?;
            }
            ShellCommand::Add => {
                self.app.begin_add();
                return self.run_editor();
            }
            ShellCommand::Edit(id) => {
                if !self.app.begin_edit(&id) {
                    writeln!(self.output, "employee not found: {id}")?;
                    return Ok(true);
                }
                return self.run_editor();
            }
            ShellCommand::Delete(id) => return self.run_delete(id),
            ShellCommand::Show(id) => self.print_employee(&id)?,
            ShellCommand::Help => writeln!(self.output, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn run_editor(&mut self) -> io::Result<bool> {
        if let Some(mode) = self.app.editor().mode() {
            writeln!(self.output, "{}", mode.title())?;
            writeln!(self.output, "{}", mode.description())?;
        }

        let mut pending: Vec<FormField> = FormField::ALL.to_vec();
        loop {
            for field in pending.drain(..) {
                if !self.prompt_field(field)? {
                    self.app.cancel_editor();
                    return Ok(false);
                }
            }

            match self.app.submit_editor() {
                Ok((id, outcome)) => {
                    self.report_saved(&id, outcome)?;
                    self.print_table()?;
                    return Ok(true);
                }
                Err(AppError::Form(err)) => {
                    writeln!(self.output, "{err}")?;
                    match err.field() {
                        Some(field) => pending.push(field),
                        None => return Ok(true),
                    }
                }
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    self.app.cancel_editor();
                    return Ok(true);
                }
            }
        }
    }

    fn report_saved(&mut self, id: &EmployeeId, outcome: MutationOutcome) -> io::Result<()> {
        if outcome.is_applied() {
            writeln!(self.output, "saved employee {id}")
        } else {
            writeln!(self.output, "employee not found: {id}")
        }
    }

    /// Prompts for one input; `false` on end of input.
    fn prompt_field(&mut self, field: FormField) -> io::Result<bool> {
        let current = self
            .app
            .editor()
            .form()
            .map(|form| form.get(field).to_string())
            .unwrap_or_default();
        write!(self.output, "{} [{}]: ", field.label(), current)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let value = line.trim();
        if !value.is_empty() {
            if let Err(err) = self.app.set_field(field, value) {
                debug!(
                    "event=shell_field module=cli status=rejected field={:?} reason={}",
                    field, err
                );
            }
        }
        Ok(true)
    }

    fn run_delete(&mut self, id: EmployeeId) -> io::Result<bool> {
        if self.app.service().get(&id).is_none() {
            writeln!(self.output, "employee not found: {id}")?;
            return Ok(true);
        }

        self.app.request_delete(id);
        writeln!(self.output, "Are you sure?")?;
        writeln!(
            self.output,
            "This action cannot be undone. This will permanently delete the employee record."
        )?;
        write!(self.output, "{CONFIRM_PROMPT}")?;
        self.output.flush()?;

        let answer = self.read_line()?;
        let confirmed = matches!(
            answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes")
        );
        if confirmed {
            self.app.confirm_delete();
            self.print_table()?;
        } else {
            self.app.cancel_delete();
            writeln!(self.output, "cancelled")?;
        }
        Ok(answer.is_some())
    }

    fn print_table(&mut self) -> io::Result<()> {
        let table = render_table(&self.app.rows());
        write!(self.output, "{table}")
    }

    fn print_employee(&mut self, id: &EmployeeId) -> io::Result<()> {
        let Some(employee) = self.app.service().get(id) else {
            return writeln!(self.output, "employee not found: {id}");
        };
        let details = describe(employee, self.app.date_format());
        writeln!(self.output, "{details}")
    }

    fn print_notifications(&mut self) -> io::Result<()> {
        for notification in self.app.take_notifications() {
            writeln!(
                self.output,
                "✓ {}: {}",
                notification.title, notification.description
            )?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}

fn describe(employee: &Employee, date_format: &str) -> String {
    [
        ("ID", employee.id.to_string()),
        ("Name", employee.full_name()),
        ("Email", employee.email.clone()),
        ("Phone", employee.phone.clone()),
        ("Position", employee.position.clone()),
        ("Department", employee.department.clone()),
        ("Salary", employee.salary.to_string()),
        ("Hire Date", format_date(employee.hire_date, date_format)),
    ]
    .iter()
    .map(|(label, value)| format!("{:<11} {value}", format!("{label}:")))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{Shell, ShellCommand, ShellError};
    use roster_core::{
        sample_roster, EmployeeId, FormField, InMemoryEmployeeRepository, MutationOutcome,
        RosterApp, RosterService, SequentialIdGenerator,
    };
    use std::io::Cursor;

    type App = RosterApp<InMemoryEmployeeRepository, SequentialIdGenerator>;

    fn app() -> App {
        let repo = InMemoryEmployeeRepository::with_employees(sample_roster()).unwrap();
        RosterApp::new(RosterService::new(repo, SequentialIdGenerator::default()))
    }

    fn run(app: &mut App, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(app, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_recognises_commands() {
        assert_eq!(ShellCommand::parse("list"), Ok(ShellCommand::List));
        assert_eq!(
            ShellCommand::parse("search Eng ops"),
            Ok(ShellCommand::Search("Eng ops".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("  EDIT 42 \n"),
            Ok(ShellCommand::Edit(EmployeeId::from("42")))
        );
        assert_eq!(
            ShellCommand::parse("delete"),
            Err(ShellError::MissingArgument("delete"))
        );
        assert_eq!(
            ShellCommand::parse("launch"),
            Err(ShellError::Unknown("launch".to_string()))
        );
    }

    #[test]
    fn search_keeps_inner_whitespace() {
        assert_eq!(
            ShellCommand::parse("search  a b"),
            Ok(ShellCommand::Search(" a b".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("search"),
            Ok(ShellCommand::Search(String::new()))
        );
    }

    #[test]
    fn session_lists_and_searches() {
        let mut app = app();
        let out = run(&mut app, "search product\nquit\n");

        assert!(out.contains("John Doe"));
        let after_search = out.rsplit("> ").nth(1).unwrap();
        assert!(after_search.contains("Jane Smith"));
        assert!(!after_search.contains("John Doe"));
    }

    #[test]
    fn add_session_prompts_every_field_and_notifies() {
        let mut app = app();
        let script = "add\nAnn\nLee\nann.lee@company.com\n555-0100\nDesigner\nDesign\n\
                      abc\n2024-03-01\n72000\nquit\n";
        let out = run(&mut app, script);

        assert!(out.contains("Add New Employee"));
        assert!(out.contains("`abc` is not a valid salary"));
        assert!(out.contains("saved employee 3"));
        assert!(out.contains("✓ Employee added: New employee has been added successfully."));
        assert_eq!(app.service().len(), 3);
        assert_eq!(app.service().employees()[2].salary, 72_000.0);
    }

    #[test]
    fn edit_session_keeps_prefilled_values() {
        let mut app = app();
        let script = "edit 1\n\n\n\n\nStaff Engineer\n\n\n\nquit\n";
        let out = run(&mut app, script);

        assert!(out.contains("First Name [John]: "));
        assert!(out.contains("✓ Employee updated"));
        let john = &app.service().employees()[0];
        assert_eq!(john.position, "Staff Engineer");
        assert_eq!(john.first_name, "John");
        assert_eq!(john.salary, 85_000.0);
    }

    #[test]
    fn delete_session_requires_yes() {
        let mut app = app();
        let out = run(&mut app, "delete 2\nn\ndelete 2\ny\nquit\n");

        assert!(out.contains("cancelled"));
        assert!(out.contains("✓ Employee deleted"));
        assert_eq!(app.service().len(), 1);
    }

    #[test]
    fn unknown_ids_and_commands_are_reported() {
        let mut app = app();
        let out = run(&mut app, "edit 99\ndelete 99\nshow 99\nfly\n");

        assert_eq!(out.matches("employee not found: 99").count(), 3);
        assert!(out.contains("unknown command `fly`"));
        assert_eq!(app.service().len(), 2);
    }

    #[test]
    fn end_of_input_inside_form_cancels_editor() {
        let mut app = app();
        run(&mut app, "add\nAnn\n");

        assert!(!app.editor().is_open());
        assert_eq!(app.service().len(), 2);
    }

    #[test]
    fn show_prints_all_fields() {
        let mut app = app();
        let out = run(&mut app, "show 1\n");

        assert!(out.contains("Phone:      +1 (555) 123-4567"));
        assert!(out.contains("Salary:     85000"));
        assert!(out.contains("Hire Date:  1/15/2023"));
    }

    #[test]
    fn ignored_save_is_not_reported_as_saved() {
        let mut app = app();
        let mut output = Vec::new();
        let mut shell = Shell::new(&mut app, Cursor::new(&b""[..]), &mut output);

        shell
            .report_saved(&EmployeeId::from("1"), MutationOutcome::Ignored)
            .unwrap();
        shell
            .report_saved(&EmployeeId::from("2"), MutationOutcome::Applied)
            .unwrap();
        drop(shell);

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out, "employee not found: 1\nsaved employee 2\n");
    }

    #[test]
    fn field_prompt_on_closed_editor_changes_nothing() {
        let mut app = app();
        let mut output = Vec::new();
        let mut shell = Shell::new(&mut app, Cursor::new(&b"Ann\n"[..]), &mut output);

        assert!(shell.prompt_field(FormField::FirstName).unwrap());
        drop(shell);

        assert!(!app.editor().is_open());
        assert_eq!(app.service().employees()[0].first_name, "John");
        assert!(String::from_utf8(output).unwrap().starts_with("First Name []: "));
    }
}
