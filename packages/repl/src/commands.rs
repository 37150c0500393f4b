//! REPL command parsing and execution.
//!
//! Commands:
//! - `get [key]` - Show the value at key (whole store without one)
//! - `set <key> <json>` - Write only if the key is absent (dotted keys overwrite)
//! - `set <json-object>` - Merge in, keeping existing entries
//! - `put <key> <json>` - Write only if the key is present
//! - `put <json-object>` - Merge in, overwriting existing entries
//! - `has [key]` - Whether something is stored at key
//! - `del [key...]` - Delete keys (everything without any)
//! - `enable <key>` / `disable <key>` - Store `true` / `false`
//! - `truthy <key>` / `falsey <key>` - Boolean coercion of the value
//! - `flags [key...]` - Command-line flags for keys (all without any)
//! - `size` - Number of top-level entries
//! - `kind <key>` - The kind of the stored value
//! - `help` - Show help
//! - `exit` - Exit the REPL

use nu_ansi_term::{Color, Style};

use pathstore::{Key, PathStore, Value};
use pathstore_serde::{Codec, JsonCodec};

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command failed with an error message
    Error(String),
    /// User requested to exit
    Exit,
    /// Show help
    Help,
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Every command name, aliases included.
pub const COMMANDS: &[&str] = &[
    "get", "set", "put", "has", "del", "delete", "enable", "disable", "truthy", "falsey", "flags",
    "size", "kind", "help", "exit", "quit", "q",
];

/// Parse and execute a command
pub fn execute(input: &str, store: &mut PathStore) -> CommandResult {
    let input = input.trim();

    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    log::debug!("command '{}' args '{}'", command, args);

    match command.to_lowercase().as_str() {
        "help" | "?" => CommandResult::Help,
        "exit" | "quit" | "q" => CommandResult::Exit,
        "get" => cmd_get(args, store),
        "set" => cmd_write(args, store, Write::Set),
        "put" => cmd_write(args, store, Write::Put),
        "has" => cmd_has(args, store),
        "del" | "delete" => cmd_delete(args, store),
        "enable" => cmd_toggle(args, store, true),
        "disable" => cmd_toggle(args, store, false),
        "truthy" => cmd_truthy(args, store, true),
        "falsey" => cmd_truthy(args, store, false),
        "flags" => cmd_flags(args, store),
        "size" => CommandResult::ok_display(store.size().to_string()),
        "kind" => cmd_kind(args, store),
        _ => CommandResult::Error(format!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            command
        )),
    }
}

/// Format help text
pub fn format_help() -> String {
    let cmd_style = Style::new().bold().fg(Color::Cyan);
    let arg_style = Style::new().fg(Color::Yellow);
    let desc_style = Style::new().fg(Color::White);

    let mut help = String::new();
    help.push_str(&format!(
        "{}\n\n",
        Style::new().bold().paint("pathstore REPL Commands")
    ));

    let commands = [
        ("get", "[key]", "Show the value at key, or the whole store"),
        ("set", "<key> <json>", "Write if absent (dotted keys overwrite)"),
        ("set", "<json-object>", "Merge in, keeping existing entries"),
        ("put", "<key> <json>", "Write only if present"),
        ("put", "<json-object>", "Merge in, overwriting existing entries"),
        ("has", "[key]", "Whether key is present, or the store non-empty"),
        ("del", "[key...]", "Delete keys, or everything (alias: delete)"),
        ("", "", ""),
        ("enable", "<key>", "Store true at key"),
        ("disable", "<key>", "Store false at key"),
        ("truthy", "<key>", "Whether the value at key is truthy"),
        ("falsey", "<key>", "Whether the value at key is falsey"),
        ("flags", "[key...]", "Command-line flags for keys, or all keys"),
        ("size", "", "Number of top-level entries"),
        ("kind", "<key>", "Kind of the value at key"),
        ("", "", ""),
        ("help", "", "Show this help message"),
        ("exit", "", "Exit the REPL (alias: quit, q)"),
    ];

    for (cmd, args, desc) in commands {
        if cmd.is_empty() {
            help.push('\n');
        } else {
            help.push_str(&format!(
                "  {:<12} {:<24} {}\n",
                cmd_style.paint(cmd),
                arg_style.paint(args),
                desc_style.paint(desc)
            ));
        }
    }

    help.push_str(&format!("\n{}\n", Style::new().bold().paint("Keys")));
    help.push_str("  Dotted keys address nested entries: ");
    help.push_str(&arg_style.paint("server.http.port").to_string());
    help.push_str("\n  Escape a literal dot with a backslash: ");
    help.push_str(&arg_style.paint(r"app\.toml").to_string());
    help.push('\n');

    help.push_str(&format!("\n{}\n", Style::new().bold().paint("Examples")));
    for example in [
        r#"set {"server": {"port": 8080}, "verbose": false}"#,
        "put server.port 9090",
        "enable verbose",
        "flags",
    ] {
        help.push_str(&format!("  {}\n", arg_style.paint(example)));
    }

    help
}

#[derive(Clone, Copy)]
enum Write {
    Set,
    Put,
}

impl Write {
    fn name(self) -> &'static str {
        match self {
            Write::Set => "set",
            Write::Put => "put",
        }
    }

    fn skipped(self) -> &'static str {
        match self {
            Write::Set => "unchanged (already set)",
            Write::Put => "unchanged (not present)",
        }
    }
}

fn cmd_get(args: &str, store: &mut PathStore) -> CommandResult {
    let key = optional_key(args);
    match store.get(key) {
        Some(value) => CommandResult::ok_display(format_value(&value)),
        None => CommandResult::ok_display(Color::Yellow.paint("(not set)").to_string()),
    }
}

fn cmd_write(args: &str, store: &mut PathStore, mode: Write) -> CommandResult {
    let (key, value) = match parse_write_args(args) {
        Some(WriteArgs::Merge(text)) => match decode(text) {
            Ok(Value::Map(map)) => (Key::Map(map), Value::Null),
            Ok(other) => {
                return CommandResult::Error(format!(
                    "{} without a key needs a JSON object, got {}",
                    mode.name(),
                    other.kind()
                ))
            }
            Err(e) => return CommandResult::Error(e),
        },
        Some(WriteArgs::Entry(key, text)) => match decode(text) {
            Ok(value) => (Key::from(key), value),
            Err(e) => return CommandResult::Error(e),
        },
        None => {
            return CommandResult::Error(format!(
                "Usage: {0} <key> <json> | {0} <json-object>\nExample: {0} server.port 8080",
                mode.name()
            ))
        }
    };

    let before = touched(store, &key);
    let after = match mode {
        Write::Set => touched(store.set(key.clone(), value), &key),
        Write::Put => touched(store.put(key.clone(), value), &key),
    };

    if after == before {
        CommandResult::ok_display(Color::Yellow.paint(mode.skipped()).to_string())
    } else {
        CommandResult::ok_display(Color::Green.paint("ok").to_string())
    }
}

/// The entries a write to `key` can change.
fn touched(store: &PathStore, key: &Key) -> Vec<Option<Value>> {
    match key {
        Key::Name(name) => vec![store.get_ref(name).cloned()],
        Key::Map(map) => map.keys().map(|k| store.data().get(k).cloned()).collect(),
        _ => Vec::new(),
    }
}

fn cmd_has(args: &str, store: &mut PathStore) -> CommandResult {
    CommandResult::ok_display(store.has(optional_key(args)).to_string())
}

fn cmd_delete(args: &str, store: &mut PathStore) -> CommandResult {
    let names: Vec<&str> = args.split_whitespace().collect();
    let key = if names.is_empty() {
        Key::Whole
    } else {
        Key::from(names)
    };
    store.delete(key);
    CommandResult::ok_display(Color::Green.paint("ok").to_string())
}

fn cmd_toggle(args: &str, store: &mut PathStore, on: bool) -> CommandResult {
    let Some(key) = required_key(args) else {
        let name = if on { "enable" } else { "disable" };
        return CommandResult::Error(format!("Usage: {} <key>", name));
    };
    if on {
        store.enable(key);
    } else {
        store.disable(key);
    }
    CommandResult::ok_display(Color::Green.paint("ok").to_string())
}

fn cmd_truthy(args: &str, store: &mut PathStore, want: bool) -> CommandResult {
    let Some(key) = required_key(args) else {
        let name = if want { "truthy" } else { "falsey" };
        return CommandResult::Error(format!("Usage: {} <key>", name));
    };
    let answer = if want {
        store.truthy(key)
    } else {
        store.falsey(key)
    };
    CommandResult::ok_display(answer.to_string())
}

fn cmd_flags(args: &str, store: &mut PathStore) -> CommandResult {
    let keys: Vec<&str> = args.split_whitespace().collect();
    let flags = if keys.is_empty() {
        store.flags()
    } else {
        store.flags_for(&keys)
    };

    if flags.is_empty() {
        CommandResult::ok_display(Color::DarkGray.paint("(no flags)").to_string())
    } else {
        CommandResult::ok_display(flags.join("\n"))
    }
}

fn cmd_kind(args: &str, store: &mut PathStore) -> CommandResult {
    let Some(key) = required_key(args) else {
        return CommandResult::Error("Usage: kind <key>".to_string());
    };
    match store.get(key) {
        Some(value) => CommandResult::ok_display(value.kind().to_string()),
        None => CommandResult::ok_display(Color::Yellow.paint("(not set)").to_string()),
    }
}

fn optional_key(args: &str) -> Key {
    required_key(args).map_or(Key::Whole, Key::from)
}

fn required_key(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

fn decode(text: &str) -> Result<Value, String> {
    JsonCodec::compact()
        .decode(text)
        .map_err(|e| format!("Invalid JSON: {}", e))
}

#[derive(Debug, PartialEq)]
enum WriteArgs<'a> {
    /// A bare JSON document to merge in.
    Merge(&'a str),
    /// A key followed by a JSON value.
    Entry(&'a str, &'a str),
}

/// Split write arguments into a key and its JSON value, or a bare document.
///
/// Keys contain no whitespace, so the first whitespace run ends the key.
fn parse_write_args(args: &str) -> Option<WriteArgs<'_>> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }

    if args.starts_with(['{', '[']) {
        return Some(WriteArgs::Merge(args));
    }

    let (key, value) = args.split_once(char::is_whitespace)?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(WriteArgs::Entry(key, value))
}

/// Format a value as pretty JSON with syntax highlighting
fn format_value(value: &Value) -> String {
    let text = JsonCodec::pretty()
        .encode(value)
        .unwrap_or_else(|_| format!("{:?}", value));
    highlight_json(&text)
}

fn highlight_json(pretty: &str) -> String {
    let mut result = String::new();
    let mut in_string = false;
    let mut escape_next = false;
    let mut word = String::new();

    for c in pretty.chars() {
        if escape_next {
            result.push_str(&Color::Green.paint(c.to_string()).to_string());
            escape_next = false;
            continue;
        }

        if in_string {
            if c == '\\' {
                escape_next = true;
            } else if c == '"' {
                in_string = false;
            }
            result.push_str(&Color::Green.paint(c.to_string()).to_string());
            continue;
        }

        if c.is_ascii_alphabetic() {
            word.push(c);
            continue;
        }
        flush_word(&mut result, &mut word);

        match c {
            '"' => {
                in_string = true;
                result.push_str(&Color::Green.paint("\"").to_string());
            }
            '{' | '}' | '[' | ']' => {
                result.push_str(&Color::White.bold().paint(c.to_string()).to_string())
            }
            ':' | ',' => result.push_str(&Color::White.paint(c.to_string()).to_string()),
            _ if c.is_ascii_digit() || c == '.' || c == '-' => {
                result.push_str(&Color::Cyan.paint(c.to_string()).to_string())
            }
            _ => result.push(c),
        }
    }
    flush_word(&mut result, &mut word);

    result
}

/// Keywords (`null`, `true`, `false`) and exponent markers outside strings.
fn flush_word(result: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    let color = match word.as_str() {
        "null" | "true" | "false" => Color::Yellow,
        _ => Color::Cyan,
    };
    result.push_str(&color.paint(word.as_str()).to_string());
    word.clear();
}

#[cfg(test)]
pub(crate) fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}
