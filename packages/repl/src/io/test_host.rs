//! A scripted host for driving the REPL loop in tests.

use std::collections::VecDeque;

use super::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Replays queued lines and signals and records everything written back.
///
/// Signals are handed out before lines, mirroring how the loop polls.
#[derive(Debug, Default)]
pub struct TestHost {
    inputs: VecDeque<String>,
    signals: VecDeque<Signal>,
    outputs: Vec<Output>,
    prompts: Vec<PromptConfig>,
    flushes: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with `lines` already queued.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new();
        host.inputs.extend(lines.into_iter().map(Into::into));
        host
    }

    pub fn queue_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    pub fn queue_signal(&mut self, signal: Signal) {
        self.signals.push_back(signal);
    }

    pub fn output(&self) -> &[Output] {
        &self.outputs
    }

    /// Text of every output with `style`, in order.
    pub fn texts(&self, style: OutputStyle) -> Vec<&str> {
        self.outputs
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.texts(OutputStyle::Error)
    }

    /// Every prompt the loop sent, oldest first.
    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn is_drained(&self) -> bool {
        self.inputs.is_empty() && self.signals.is_empty()
    }
}

impl IoHost for TestHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        if self.is_drained() {
            // A real terminal would block forever; end the loop instead.
            self.signals.push_back(Signal::Eof);
        }
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.inputs.pop_front().map(|line| InputLine { line }))
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.signals.pop_front())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.outputs.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_come_back_in_order() {
        let mut host = TestHost::scripted(["first", "second"]);
        assert_eq!(host.read_input().unwrap().unwrap().line, "first");
        assert_eq!(host.read_input().unwrap().unwrap().line, "second");
        assert!(host.read_input().unwrap().is_none());
    }

    #[test]
    fn signals_come_back_in_order() {
        let mut host = TestHost::new();
        host.queue_signal(Signal::Interrupt);
        host.queue_signal(Signal::Eof);
        assert_eq!(host.read_signal().unwrap(), Some(Signal::Interrupt));
        assert_eq!(host.read_signal().unwrap(), Some(Signal::Eof));
        assert_eq!(host.read_signal().unwrap(), None);
    }

    #[test]
    fn drained_host_reports_eof() {
        let mut host = TestHost::new();
        host.wait_for_input().unwrap();
        assert_eq!(host.read_signal().unwrap(), Some(Signal::Eof));
    }

    #[test]
    fn pending_input_does_not_inject_eof() {
        let mut host = TestHost::new();
        host.queue_input("get");
        host.wait_for_input().unwrap();
        assert_eq!(host.read_signal().unwrap(), None);
    }

    #[test]
    fn records_output_prompts_and_flushes() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("ok")).unwrap();
        host.write_output(Output::error("bad")).unwrap();
        host.write_prompt(PromptConfig { key_count: 2 }).unwrap();
        host.flush().unwrap();

        assert_eq!(host.output().len(), 2);
        assert_eq!(host.errors(), vec!["bad"]);
        assert_eq!(host.texts(OutputStyle::Normal), vec!["ok"]);
        assert_eq!(host.prompts(), &[PromptConfig { key_count: 2 }]);
        assert_eq!(host.flush_count(), 1);
    }
}
