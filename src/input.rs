use crate::commands::dispatcher::CommandDispatcher;
use crate::config::Config;
use crate::error::ChatError;
use crate::message::Role;

use console::style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config as EditorConfig, Context, EditMode, Editor, Helper};
use std::borrow::Cow;

pub type ChatEditor = Editor<ChatHelper, FileHistory>;

/// Completes slash command names.
pub struct CommandCompleter {
    command_registry: CommandDispatcher,
}

impl CommandCompleter {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self { command_registry }
    }

    fn candidates(&self, partial: &str) -> Vec<Pair> {
        self.command_registry
            .get_command_names()
            .into_iter()
            .filter(|cmd| cmd.starts_with(partial))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd,
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Some(partial) = line.get(..pos).and_then(|head| head.strip_prefix('/')) else {
            return Ok((pos, Vec::new()));
        };
        if partial.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((1, self.candidates(partial)))
    }
}

/// Helper struct that combines all rustyline components
pub struct ChatHelper {
    completer: CommandCompleter,
    highlighter: MatchingBracketHighlighter,
    hinter: HistoryHinter,
}

impl ChatHelper {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self {
            completer: CommandCompleter::new(command_registry),
            highlighter: MatchingBracketHighlighter::new(),
            hinter: HistoryHinter {},
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(style(hint).dim().to_string())
    }
}

impl Validator for ChatHelper {}

/// Creates a configured rustyline editor
pub fn create_editor(command_registry: CommandDispatcher) -> Result<ChatEditor, ChatError> {
    let config = EditorConfig::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut editor = Editor::with_config(config)
        .map_err(|e| ChatError::Input(format!("Failed to create line editor: {}", e)))?;

    editor.set_helper(Some(ChatHelper::new(command_registry)));
    let _ = editor.load_history(&Config::input_history_path());

    Ok(editor)
}

/// Reads one line; `None` on Ctrl-C or Ctrl-D.
pub fn read_input(editor: &mut ChatEditor, role: Role) -> Result<Option<String>, ChatError> {
    let prompt = if cfg!(windows) && std::env::var("PSModulePath").is_ok() {
        format!("{}> ", role)
    } else {
        style(format!("{}> ", role)).bold().cyan().to_string()
    };

    match editor.readline(&prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                editor
                    .add_history_entry(&line)
                    .map_err(|e| ChatError::Input(format!("Failed to add history entry: {}", e)))?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("Exiting...");
            Ok(None)
        }
        Err(err) => Err(ChatError::Input(format!("Input error: {}", err))),
    }
}

/// Saves the editor history
pub fn save_history(editor: &mut ChatEditor) -> Result<(), ChatError> {
    let history_path = Config::input_history_path();

    if let Some(parent) = history_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    editor
        .save_history(&history_path)
        .map_err(|e| ChatError::Input(format!("Failed to save history: {}", e)))
}
