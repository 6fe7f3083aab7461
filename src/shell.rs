//! Line-oriented front end for a [`Session`].

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use wayfile_core::{DirEntry, Location};
use wayfile_ops::{FileSystem, OperationComplete};
use wayfile_session::{Action, HistoryAvailability, Presenter, Session, SessionError};

const HELP: &str = "\
Commands:
  ls                 show the current listing
  cd <dir>           open a directory
  open <name>        open a listed entry (directories navigate, files launch)
  back, forward      move through the history
  drives             show the mounted volumes
  copy <name>        stage an item for copying
  cut <name>         stage an item for moving
  paste              copy or move the staged item here
  rm <name>          delete an item
  mv <name> <new>    rename an item
  mkdir              create a new folder
  touch              create a new text file
  drop <path>...     copy several items here
  hidden             show or hide dot-entries
  refresh            list the current location again
  clip               show the staged item
  help               show this help
  quit               leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ls,
    Cd(String),
    Open(String),
    Back,
    Forward,
    Drives,
    Copy(String),
    Cut(String),
    Paste,
    Rm(String),
    Mv(String, String),
    Mkdir,
    Touch,
    Drop(Vec<String>),
    Hidden,
    Refresh,
    Clip,
    Help,
    Quit,
}

/// Split a line into words and turn it into a [`Command`].
///
/// Empty lines parse to `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let words = shell_words::split(line).map_err(|e| format!("cannot parse line: {e}"))?;
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let one = |name: &str| -> Result<String, String> {
        match args {
            [arg] => Ok(arg.clone()),
            _ => Err(format!("usage: {name} <name>")),
        }
    };
    let none = |command: Command| -> Result<Command, String> {
        if args.is_empty() {
            Ok(command)
        } else {
            Err(format!("{head} takes no arguments"))
        }
    };

    let command = match head.as_str() {
        "ls" => none(Command::Ls)?,
        "cd" => Command::Cd(one("cd")?),
        "open" => Command::Open(one("open")?),
        "back" => none(Command::Back)?,
        "forward" => none(Command::Forward)?,
        "drives" => none(Command::Drives)?,
        "copy" => Command::Copy(one("copy")?),
        "cut" => Command::Cut(one("cut")?),
        "paste" => none(Command::Paste)?,
        "rm" => Command::Rm(one("rm")?),
        "mv" => match args {
            [from, to] => Command::Mv(from.clone(), to.clone()),
            _ => return Err("usage: mv <name> <new name>".to_string()),
        },
        "mkdir" => none(Command::Mkdir)?,
        "touch" => none(Command::Touch)?,
        "drop" => {
            if args.is_empty() {
                return Err("usage: drop <path>...".to_string());
            }
            Command::Drop(args.to_vec())
        }
        "hidden" => none(Command::Hidden)?,
        "refresh" => none(Command::Refresh)?,
        "clip" => none(Command::Clip)?,
        "help" | "?" => none(Command::Help)?,
        "quit" | "exit" | "q" => none(Command::Quit)?,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(Some(command))
}

/// Resolve a user-typed name against the listing and location.
///
/// A listed name wins, then an absolute path, then a path relative to the
/// current directory. Typed paths are normalized lexically, so `..` names
/// the parent. Relative names are meaningless on the drive list.
pub fn resolve(name: &str, listing: &[DirEntry], location: &Location) -> Option<PathBuf> {
    if let Some(entry) = listing.iter().find(|e| e.name == name) {
        return Some(entry.path.clone());
    }
    let path = Path::new(name);
    if path.is_absolute() {
        return Some(normalize(path));
    }
    location.path().map(|dir| normalize(&dir.join(path)))
}

/// Drop `.` components and fold `..` into its parent without touching the
/// filesystem. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Prints everything a session reports as plain text.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one line. A closed output is not worth failing an action over.
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn listing_changed(&mut self, location: &Location, entries: &[DirEntry]) {
        self.line(format_args!("{location}"));
        if entries.is_empty() {
            self.line(format_args!("  (empty)"));
        }
        for entry in entries {
            let marker = if entry.is_dir() { "/" } else { "" };
            self.line(format_args!("  {}{}", entry.name, marker));
        }
    }

    fn history_changed(&mut self, availability: HistoryAvailability) {
        tracing::trace!(
            back = availability.can_go_back,
            forward = availability.can_go_forward,
            "history availability"
        );
    }

    fn report_error(&mut self, error: &SessionError) {
        self.line(format_args!("error: {error}"));
    }

    fn report_summary(&mut self, summary: &OperationComplete) {
        self.line(format_args!("{}", summary.summary()));
        for err in &summary.errors {
            self.line(format_args!("  {}: {}", err.path.display(), err.message));
        }
    }

    fn begin_rename(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.line(format_args!("created \"{name}\" (rename with `mv`)"));
    }
}

/// Reads commands and dispatches them to a session.
pub struct Shell<F, W> {
    session: Session<F, TextPresenter<W>>,
}

impl<F: FileSystem, W: Write> Shell<F, W> {
    pub fn new(session: Session<F, TextPresenter<W>>) -> Self {
        Self { session }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session<F, TextPresenter<W>> {
        &self.session
    }

    /// Prompt text for the current location.
    pub fn prompt(&self) -> String {
        self.session.state().location().to_string()
    }

    /// Handle one input line. Returns `false` when the user asked to quit.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let command = match parse_line(line) {
            Ok(Some(Command::Quit)) => return false,
            Ok(Some(command)) => command,
            Ok(None) => return true,
            Err(message) => {
                self.say(&message);
                return true;
            }
        };

        let action = match self.to_action(command) {
            Ok(Some(action)) => action,
            Ok(None) => return true,
            Err(message) => {
                self.say(&message);
                return true;
            }
        };

        // Failures were already shown by the presenter.
        let _ = self.session.dispatch(action);
        true
    }

    /// Translate a command into an action, or handle it locally.
    fn to_action(&mut self, command: Command) -> Result<Option<Action>, String> {
        let action = match command {
            Command::Ls => {
                let location = self.session.state().location().clone();
                let listing = self.session.listing().to_vec();
                self.session
                    .presenter_mut()
                    .listing_changed(&location, &listing);
                return Ok(None);
            }
            Command::Help => {
                self.say(HELP);
                return Ok(None);
            }
            Command::Clip => {
                let text = match self.session.state().clipboard().entry() {
                    Some(entry) => format!("{}: {}", entry.mode, entry.source.display()),
                    None => "clipboard is empty".to_string(),
                };
                self.say(&text);
                return Ok(None);
            }
            Command::Quit => return Ok(None),
            Command::Cd(name) => Action::NavigateInto(self.resolve(&name)?),
            Command::Open(name) => {
                let entry = self
                    .session
                    .listing()
                    .iter()
                    .find(|e| e.name == name)
                    .cloned()
                    .ok_or_else(|| format!("no entry named \"{name}\" here"))?;
                Action::Activate(entry)
            }
            Command::Back => Action::GoBack,
            Command::Forward => Action::GoForward,
            Command::Drives => Action::ShowDrives,
            Command::Copy(name) => Action::StageCopy(self.resolve(&name)?),
            Command::Cut(name) => Action::StageCut(self.resolve(&name)?),
            Command::Paste => Action::Paste,
            Command::Rm(name) => Action::Delete(self.resolve(&name)?),
            Command::Mv(name, new_name) => Action::Rename {
                source: self.resolve(&name)?,
                new_name,
            },
            Command::Mkdir => Action::CreateFolder,
            Command::Touch => Action::CreateTextFile,
            Command::Drop(names) => Action::Drop(
                names
                    .iter()
                    .map(|name| self.resolve(name))
                    .collect::<Result<_, _>>()?,
            ),
            Command::Hidden => Action::ToggleHidden,
            Command::Refresh => Action::Refresh,
        };
        Ok(Some(action))
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, String> {
        resolve(name, self.session.listing(), self.session.state().location())
            .ok_or_else(|| format!("\"{name}\" is not a path; use an absolute path on the drive list"))
    }

    fn say(&mut self, text: &str) {
        self.session.presenter_mut().line(format_args!("{text}"));
    }
}
