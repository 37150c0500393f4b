//! Terminal host on reedline: line editing (vi or emacs), completion,
//! highlighting and history.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use nu_ansi_term::{Color, Style};
use reedline::{
    default_emacs_keybindings, default_vi_insert_keybindings, default_vi_normal_keybindings,
    ColumnarMenu, DefaultHinter, EditCommand, EditMode as ReedlineEditMode, Emacs,
    FileBackedHistory, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode,
    PromptHistorySearch, PromptHistorySearchStatus, PromptViMode, Reedline, ReedlineEvent,
    ReedlineMenu, Signal as ReedlineSignal, Vi,
};

use crate::completer::{KeyIndex, ReplCompleter};
use crate::config::{EditMode, ReplConfig};
use crate::highlighter::ReplHighlighter;
use crate::io::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

const HISTORY_CAPACITY: usize = 1000;
const COMPLETION_MENU: &str = "completion_menu";

pub struct TerminalHost {
    line_editor: Reedline,
    pending_input: Option<InputLine>,
    pending_signal: Option<Signal>,
    prompt: TerminalPrompt,
}

impl TerminalHost {
    /// Build the line editor. Completion draws store keys from `keys`.
    pub fn new(config: &ReplConfig, keys: KeyIndex) -> Self {
        let completion_menu = Box::new(
            ColumnarMenu::default()
                .with_name(COMPLETION_MENU)
                .with_text_style(Style::new().fg(Color::Cyan))
                .with_selected_text_style(Style::new().fg(Color::Black).on(Color::Cyan).bold()),
        );

        let mut line_editor = Reedline::create()
            .with_completer(Box::new(ReplCompleter::new(keys)))
            .with_highlighter(Box::new(ReplHighlighter::new()))
            .with_hinter(Box::new(
                DefaultHinter::default().with_style(Style::new().fg(Color::LightGray).dimmed()),
            ))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(edit_mode(config.edit_mode));

        if let Some(path) = &config.history_path {
            match open_history(path) {
                Ok(history) => line_editor = line_editor.with_history(history),
                Err(e) => log::warn!("history disabled: {}", e),
            }
        }

        Self {
            line_editor,
            pending_input: None,
            pending_signal: None,
            prompt: TerminalPrompt::default(),
        }
    }
}

fn with_tab_completion(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn edit_mode(mode: EditMode) -> Box<dyn ReedlineEditMode> {
    match mode {
        EditMode::Vi => {
            let mut insert = default_vi_insert_keybindings();
            with_tab_completion(&mut insert);
            Box::new(Vi::new(insert, default_vi_normal_keybindings()))
        }
        EditMode::Emacs => {
            let mut keybindings = default_emacs_keybindings();
            with_tab_completion(&mut keybindings);
            keybindings.add_binding(
                KeyModifiers::CONTROL,
                KeyCode::Char('d'),
                ReedlineEvent::Edit(vec![EditCommand::Clear]),
            );
            Box::new(Emacs::new(keybindings))
        }
    }
}

fn open_history(path: &Path) -> Result<Box<FileBackedHistory>, IoError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let history = FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf())
        .map_err(|e| IoError::Io(e.to_string()))?;
    Ok(Box::new(history))
}

impl IoHost for TerminalHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        match self.line_editor.read_line(&self.prompt) {
            Ok(ReedlineSignal::Success(line)) => self.pending_input = Some(InputLine { line }),
            Ok(ReedlineSignal::CtrlC) => self.pending_signal = Some(Signal::Interrupt),
            Ok(ReedlineSignal::CtrlD) => self.pending_signal = Some(Signal::Eof),
            Err(e) => return Err(IoError::Io(format!("Reedline error: {}", e))),
        }
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.pending_input.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        let styled = match output.style {
            OutputStyle::Normal => output.text,
            OutputStyle::Error => {
                format!("{} {}", Color::Red.bold().paint("Error:"), output.text)
            }
            OutputStyle::Info | OutputStyle::Banner => Color::Cyan.paint(&output.text).to_string(),
        };
        println!("{}", styled);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompt.key_count = config.key_count;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        io::stdout().flush()?;
        Ok(())
    }
}

#[derive(Default)]
struct TerminalPrompt {
    key_count: usize,
}

impl Prompt for TerminalPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let summary = match self.key_count {
            0 => Color::Yellow.paint("empty").to_string(),
            1 => Color::Blue.bold().paint("1 key").to_string(),
            n => Color::Blue.bold().paint(format!("{} keys", n)).to_string(),
        };
        Cow::Owned(summary)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        let indicator = match edit_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => Color::Green.bold().paint(">"),
            PromptEditMode::Vi(PromptViMode::Normal) => Color::Blue.bold().paint("[N]>"),
            PromptEditMode::Vi(PromptViMode::Insert) => Color::Green.bold().paint("[I]>"),
            PromptEditMode::Custom(s) => return Cow::Owned(format!(" ({})> ", s)),
        };
        Cow::Owned(format!(" {} ", indicator))
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
