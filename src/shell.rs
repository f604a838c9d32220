// Line-oriented shell over a Store
//
// Each command mirrors one dialog of a desktop front end: it prompts for a string,
// hands it to the store unchanged and reports the outcome. An empty answer or end
// of input at a prompt cancels the command without touching the store.

use crate::config::Config;
use crate::models::{Note, Task};
use crate::store::Store;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Commands understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddTask,
    RemoveTask,
    CompleteTask,
    IncompleteTask,
    AddNote,
    RemoveNote,
    ShowTasks,
    ShowCompleted,
    ShowIncomplete,
    ShowTag,
    ShowNotes,
    Export,
    Help,
    Quit,
}

impl Command {
    pub const ALL: [Command; 14] = [
        Command::AddTask,
        Command::RemoveTask,
        Command::CompleteTask,
        Command::IncompleteTask,
        Command::AddNote,
        Command::RemoveNote,
        Command::ShowTasks,
        Command::ShowCompleted,
        Command::ShowIncomplete,
        Command::ShowTag,
        Command::ShowNotes,
        Command::Export,
        Command::Help,
        Command::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::AddTask => "add-task",
            Command::RemoveTask => "remove-task",
            Command::CompleteTask => "complete-task",
            Command::IncompleteTask => "incomplete-task",
            Command::AddNote => "add-note",
            Command::RemoveNote => "remove-note",
            Command::ShowTasks => "show-tasks",
            Command::ShowCompleted => "show-completed",
            Command::ShowIncomplete => "show-incomplete",
            Command::ShowTag => "show-tag",
            Command::ShowNotes => "show-notes",
            Command::Export => "export",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Command::AddTask => "Add a task with optional comma separated tags",
            Command::RemoveTask => "Remove a task by title",
            Command::CompleteTask => "Mark a task as completed",
            Command::IncompleteTask => "Mark a task as incomplete",
            Command::AddNote => "Add a note",
            Command::RemoveNote => "Remove every note with the given text",
            Command::ShowTasks => "List all tasks",
            Command::ShowCompleted => "List completed tasks",
            Command::ShowIncomplete => "List incomplete tasks",
            Command::ShowTag => "List tasks carrying a tag",
            Command::ShowNotes => "List all notes",
            Command::Export => "Print tasks and notes as JSON",
            Command::Help => "Show this help",
            Command::Quit => "End the session (also: exit)",
        }
    }
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name == "exit" {
            return Ok(Command::Quit);
        }
        Command::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| eyre!("Unknown command: {}", s.trim()))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a comma separated tag answer
///
/// An empty answer means no tags. Otherwise pieces are kept verbatim, so
/// `"work, urgent"` yields `["work", " urgent"]`. With `trim` set, pieces are
/// trimmed and empty ones dropped.
pub fn parse_tags(raw: &str, trim: bool) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    if trim {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        raw.split(',').map(str::to_string).collect()
    }
}

/// One `"<title> - Completed|Incomplete"` line per task, or the placeholder
pub fn render_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, placeholder: &str) -> String {
    let lines: Vec<String> = tasks
        .into_iter()
        .map(|t| format!("{} - {}", t.title, t.status_label()))
        .collect();

    if lines.is_empty() {
        placeholder.to_string()
    } else {
        lines.join("\n")
    }
}

/// Notes joined by newlines, or the placeholder
pub fn render_notes(notes: &[Note], placeholder: &str) -> String {
    if notes.is_empty() {
        placeholder.to_string()
    } else {
        notes.join("\n")
    }
}

#[derive(Serialize)]
struct Export<'a> {
    tasks: &'a [Task],
    notes: &'a [Note],
}

enum Feedback<'a> {
    Info(&'a str),
    Warning(&'a str),
}

struct Session<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Read one line without its terminator; None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask a question; None when the answer is empty or input ended
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        match self.read_line()? {
            Some(answer) if !answer.is_empty() => Ok(Some(answer)),
            _ => {
                // The question is left hanging on the same line otherwise
                writeln!(self.output)?;
                Ok(None)
            }
        }
    }

    fn say(&mut self, feedback: Feedback<'_>) -> Result<()> {
        let line = match feedback {
            Feedback::Info(msg) if self.color => msg.green().to_string(),
            Feedback::Warning(msg) if self.color => msg.yellow().to_string(),
            Feedback::Info(msg) | Feedback::Warning(msg) => msg.to_string(),
        };
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

/// Interactive front end owning a store for one session
#[derive(Debug, Default)]
pub struct Shell {
    store: Store,
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self::with_store(Store::new(), config)
    }

    pub fn with_store(store: Store, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let mut session = Session {
            input,
            output,
            color: self.config.color,
        };

        info!("Shell session started");
        session.print("Task and Note Manager")?;
        session.print("Type `help` to list commands.")?;

        loop {
            write!(session.output, "> ")?;
            session.output.flush()?;

            let Some(line) = session.read_line()? else {
                writeln!(session.output)?;
                break;
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!(input = line, "Unknown shell command");
                    session.say(Feedback::Warning(&format!("{}. Type `help` to list commands.", e)))?;
                    continue;
                }
            };

            if self.execute(command, &mut session)? == Flow::Quit {
                break;
            }
        }

        info!(
            tasks = self.store.task_count(),
            notes = self.store.note_count(),
            "Shell session finished"
        );
        Ok(())
    }

    fn execute<R: BufRead, W: Write>(&mut self, command: Command, session: &mut Session<R, W>) -> Result<Flow> {
        debug!(%command, "execute");

        match command {
            Command::AddTask => {
                let Some(title) = session.prompt("Enter task:")? else {
                    return Ok(Flow::Continue);
                };
                let raw_tags = session.prompt("Enter tags (comma separated):")?.unwrap_or_default();
                let tags = parse_tags(&raw_tags, self.config.trim_tags);

                if self.store.add_task_with_tags(&title, tags) {
                    session.say(Feedback::Info("Task added successfully!"))?;
                } else {
                    session.say(Feedback::Warning("Task already exists!"))?;
                }
            }
            Command::RemoveTask => {
                if let Some(title) = session.prompt("Enter task to remove:")? {
                    self.store.remove_task(&title);
                    session.say(Feedback::Info("Task removed successfully!"))?;
                }
            }
            Command::CompleteTask => {
                if let Some(title) = session.prompt("Enter task to complete:")? {
                    if self.store.complete_task(&title) {
                        session.say(Feedback::Info("Task marked as completed!"))?;
                    } else {
                        session.say(Feedback::Warning("Task not found!"))?;
                    }
                }
            }
            Command::IncompleteTask => {
                if let Some(title) = session.prompt("Enter task to mark as incomplete:")? {
                    if self.store.incomplete_task(&title) {
                        session.say(Feedback::Info("Task marked as incomplete!"))?;
                    } else {
                        session.say(Feedback::Warning("Task not found!"))?;
                    }
                }
            }
            Command::AddNote => {
                if let Some(text) = session.prompt("Enter note:")? {
                    if self.store.add_note(&text) {
                        session.say(Feedback::Info("Note added successfully!"))?;
                    } else {
                        session.say(Feedback::Warning("Note cannot be empty!"))?;
                    }
                }
            }
            Command::RemoveNote => {
                if let Some(text) = session.prompt("Enter note to remove:")? {
                    self.store.remove_note(&text);
                    session.say(Feedback::Info("Note removed successfully!"))?;
                }
            }
            Command::ShowTasks => {
                let text = render_tasks(self.store.get_tasks(), &self.config.tasks_placeholder);
                session.print(&text)?;
            }
            Command::ShowCompleted => {
                let text = render_tasks(self.store.get_completed_tasks(), &self.config.tasks_placeholder);
                session.print(&text)?;
            }
            Command::ShowIncomplete => {
                let text = render_tasks(self.store.get_incomplete_tasks(), &self.config.tasks_placeholder);
                session.print(&text)?;
            }
            Command::ShowTag => {
                if let Some(tag) = session.prompt("Enter tag:")? {
                    let text = render_tasks(self.store.get_tasks_by_tag(&tag), &self.config.tasks_placeholder);
                    session.print(&text)?;
                }
            }
            Command::ShowNotes => {
                let text = render_notes(self.store.get_notes(), &self.config.notes_placeholder);
                session.print(&text)?;
            }
            Command::Export => {
                let export = Export {
                    tasks: self.store.get_tasks(),
                    notes: self.store.get_notes(),
                };
                let json = serde_json::to_string_pretty(&export).context("Failed to serialize store")?;
                session.print(&json)?;
            }
            Command::Help => {
                let help: Vec<String> = Command::ALL
                    .iter()
                    .map(|c| format!("  {:<16} {}", c.name(), c.description()))
                    .collect();
                session.print("Commands:")?;
                session.print(&help.join("\n"))?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
