use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::commands::COMMANDS;

/// Syntax highlighter for the REPL
pub struct ReplHighlighter {
    commands: &'static [&'static str],
}

impl ReplHighlighter {
    pub fn new() -> Self {
        Self { commands: COMMANDS }
    }
}

impl Default for ReplHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for ReplHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if line.is_empty() {
            return styled;
        }

        let (command, rest) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], &line[pos..]),
            None => (line, ""),
        };

        let cmd_lower = command.to_lowercase();
        let cmd_style = if self.commands.contains(&cmd_lower.as_str()) {
            Style::new().bold().fg(Color::Cyan)
        } else {
            Style::new().fg(Color::Red)
        };
        styled.push((cmd_style, command.to_string()));

        if rest.is_empty() {
            return styled;
        }

        let key_style = Style::new().fg(Color::Yellow);
        let json_style = Style::new().fg(Color::Green);

        match cmd_lower.as_str() {
            "set" | "put" => match split_value(rest) {
                Some((keys, json)) => {
                    if !keys.is_empty() {
                        styled.push((key_style, keys.to_string()));
                    }
                    styled.push((json_style, json.to_string()));
                }
                None => styled.push((key_style, rest.to_string())),
            },
            "get" | "has" | "del" | "delete" | "enable" | "disable" | "truthy" | "falsey"
            | "flags" | "kind" => {
                styled.push((key_style, rest.to_string()));
            }
            _ => {
                styled.push((Style::new(), rest.to_string()));
            }
        }

        styled
    }
}

/// Split `rest` (leading whitespace included) before the JSON value.
///
/// A document opening with `{` or `[` is all JSON; otherwise the first word
/// is the key and everything after it is the value.
fn split_value(rest: &str) -> Option<(&str, &str)> {
    let body = rest.trim_start();
    let lead = rest.len() - body.len();
    if body.starts_with(['{', '[']) {
        return Some(rest.split_at(lead));
    }
    let key_end = lead + body.find(char::is_whitespace)?;
    let value_start = key_end + rest[key_end..].len() - rest[key_end..].trim_start().len();
    if value_start == rest.len() {
        return None;
    }
    Some(rest.split_at(value_start))
}
