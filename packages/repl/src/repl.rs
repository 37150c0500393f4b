//! Host-independent REPL loop.

use pathstore::PathStore;

use crate::commands::{self, CommandResult};
use crate::completer::KeyIndex;
use crate::io::{ExitReason, IoError, IoHost, Output, PromptConfig, Signal};

/// The REPL loop over a single store.
pub struct ReplCore {
    store: PathStore,
    keys: Option<KeyIndex>,
}

impl ReplCore {
    pub fn new(store: PathStore) -> Self {
        Self { store, keys: None }
    }

    /// Keep `keys` in step with the store's top-level keys, for completion.
    pub fn with_key_index(mut self, keys: KeyIndex) -> Self {
        self.keys = Some(keys);
        self.refresh_keys();
        self
    }

    /// Run until the user exits, reading and writing through `io`.
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        io.write_output(Output::banner(BANNER))?;

        loop {
            io.write_prompt(PromptConfig {
                key_count: self.store.size(),
            })?;
            io.wait_for_input()?;

            if let Some(signal) = io.read_signal()? {
                match signal {
                    Signal::Eof => {
                        io.write_output(Output::info("Goodbye!"))?;
                        io.flush()?;
                        return Ok(ExitReason::Eof);
                    }
                    Signal::Interrupt => {
                        io.write_output(Output::info("^C (use 'exit' to quit)"))?;
                        continue;
                    }
                }
            }

            let Some(input) = io.read_input()? else {
                continue;
            };

            match commands::execute(&input.line, &mut self.store) {
                CommandResult::Ok { display: None } => {}
                CommandResult::Ok {
                    display: Some(text),
                } => io.write_output(Output::normal(text))?,
                CommandResult::Error(msg) => io.write_output(Output::error(msg))?,
                CommandResult::Help => io.write_output(Output::normal(commands::format_help()))?,
                CommandResult::Exit => {
                    io.write_output(Output::info("Goodbye!"))?;
                    io.flush()?;
                    return Ok(ExitReason::UserExit);
                }
            }

            self.refresh_keys();
            io.flush()?;
        }
    }

    pub fn store(&self) -> &PathStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PathStore {
        &mut self.store
    }

    pub fn into_store(self) -> PathStore {
        self.store
    }

    fn refresh_keys(&self) {
        let Some(index) = &self.keys else {
            return;
        };
        match index.write() {
            Ok(mut keys) => {
                keys.clear();
                keys.extend(self.store.keys().cloned());
            }
            Err(_) => log::warn!("key index lock poisoned; completion may be stale"),
        }
    }
}

impl Default for ReplCore {
    fn default() -> Self {
        Self::new(PathStore::new())
    }
}

const BANNER: &str = "pathstore: nested keys, dotted paths.
Type 'help' for available commands, 'exit' to quit.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::strip_ansi_codes;
    use crate::io::{OutputStyle, TestHost};
    use pathstore::Value;

    fn normal_text(host: &TestHost) -> Vec<String> {
        host.texts(OutputStyle::Normal)
            .into_iter()
            .map(strip_ansi_codes)
            .collect()
    }

    #[test]
    fn exit_command() {
        let mut core = ReplCore::default();
        let mut host = TestHost::scripted(["exit"]);

        let result = core.run(&mut host);

        assert!(matches!(result, Ok(ExitReason::UserExit)));
        assert!(host.output().iter().any(|o| o.text.contains("Goodbye")));
    }

    #[test]
    fn eof_signal() {
        let mut core = ReplCore::default();
        let mut host = TestHost::new();
        host.queue_signal(Signal::Eof);

        assert!(matches!(core.run(&mut host), Ok(ExitReason::Eof)));
    }

    #[test]
    fn interrupt_continues() {
        let mut core = ReplCore::default();
        let mut host = TestHost::scripted(["exit"]);
        host.queue_signal(Signal::Interrupt);

        assert!(matches!(core.run(&mut host), Ok(ExitReason::UserExit)));
        assert!(host.texts(OutputStyle::Info).iter().any(|t| t.contains("^C")));
    }

    #[test]
    fn commands_mutate_the_store() {
        let mut core = ReplCore::default();
        let mut host = TestHost::scripted([
            r#"set {"server": {"port": 8080}}"#,
            "put server.port 9090",
            "enable verbose",
            "get server.port",
            "flags",
        ]);

        assert!(matches!(core.run(&mut host), Ok(ExitReason::Eof)));
        assert_eq!(core.store().get("server.port"), Some(Value::from(9090)));
        assert_eq!(
            normal_text(&host),
            vec!["ok", "ok", "ok", "9090", "--server.port=9090\n--verbose"]
        );
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let mut core = ReplCore::default();
        let mut host = TestHost::scripted(["bogus", "set a {", "set a 1", "exit"]);

        assert!(matches!(core.run(&mut host), Ok(ExitReason::UserExit)));
        assert_eq!(host.errors().len(), 2);
        assert!(core.store().has("a"));
    }

    #[test]
    fn prompt_tracks_key_count() {
        let mut core = ReplCore::new(PathStore::new());
        let mut host = TestHost::scripted(["set a 1", "set b 2", "del a"]);

        core.run(&mut host).unwrap();

        let counts: Vec<usize> = host.prompts().iter().map(|p| p.key_count).collect();
        assert_eq!(counts, vec![0, 1, 2, 1]);
    }

    #[test]
    fn key_index_follows_the_store() {
        let keys = KeyIndex::default();
        let mut seed = PathStore::new();
        seed.set("seeded", true);

        let mut core = ReplCore::new(seed).with_key_index(keys.clone());
        assert_eq!(*keys.read().unwrap(), vec!["seeded".to_string()]);

        let mut host = TestHost::scripted(["set other 1", "del seeded"]);
        core.run(&mut host).unwrap();
        assert_eq!(*keys.read().unwrap(), vec!["other".to_string()]);
    }

    #[test]
    fn help_is_printed() {
        let mut core = ReplCore::default();
        let mut host = TestHost::scripted(["help"]);
        core.run(&mut host).unwrap();
        assert!(normal_text(&host)[0].contains("pathstore REPL Commands"));
    }
}
