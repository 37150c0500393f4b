//! Hosts that drive the REPL loop outside of tests.

pub mod terminal;

pub use terminal::TerminalHost;
