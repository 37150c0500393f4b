use std::sync::{Arc, RwLock};

use reedline::{Completer, Span, Suggestion};

use crate::commands::COMMANDS;

/// Top-level keys of the live store, shared with the completer.
pub type KeyIndex = Arc<RwLock<Vec<String>>>;

/// Command and key completer for the REPL
pub struct ReplCompleter {
    keys: KeyIndex,
}

impl ReplCompleter {
    pub fn new(keys: KeyIndex) -> Self {
        Self { keys }
    }

    fn suggestion(value: &str, description: Option<String>, span: Span) -> Suggestion {
        Suggestion {
            value: value.to_string(),
            description,
            style: None,
            extra: None,
            span,
            append_whitespace: true,
            match_indices: None,
        }
    }
}

impl Default for ReplCompleter {
    fn default() -> Self {
        Self::new(KeyIndex::default())
    }
}

impl Completer for ReplCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_pos = &line[..pos];
        let words: Vec<&str> = line_to_pos.split_whitespace().collect();
        let completing_new_word = line_to_pos.is_empty() || line_to_pos.ends_with(char::is_whitespace);
        let prefix = if completing_new_word {
            ""
        } else {
            words.last().copied().unwrap_or("")
        };
        let span = Span::new(pos - prefix.len(), pos);

        if words.is_empty() || (words.len() == 1 && !completing_new_word) {
            return COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|cmd| Self::suggestion(cmd, Some(command_description(cmd)), span))
                .collect();
        }

        if !takes_key(words[0]) {
            return Vec::new();
        }

        let keys = match self.keys.read() {
            Ok(keys) => keys,
            Err(_) => return Vec::new(),
        };
        keys.iter()
            .filter(|key| key.starts_with(prefix))
            .map(|key| Self::suggestion(key, None, span))
            .collect()
    }
}

fn takes_key(command: &str) -> bool {
    matches!(
        command.to_lowercase().as_str(),
        "get" | "set" | "put" | "has" | "del" | "delete" | "enable" | "disable" | "truthy"
            | "falsey" | "flags" | "kind"
    )
}

fn command_description(cmd: &str) -> String {
    match cmd {
        "get" => "Show a value",
        "set" => "Write if absent",
        "put" => "Write if present",
        "has" => "Check presence",
        "del" | "delete" => "Delete keys",
        "enable" => "Store true",
        "disable" => "Store false",
        "truthy" | "falsey" => "Check truthiness",
        "flags" => "Show command-line flags",
        "size" => "Count entries",
        "kind" => "Show the value kind",
        "help" => "Show help",
        "exit" | "quit" | "q" => "Exit the REPL",
        _ => "",
    }
    .to_string()
}
