//! Fuzz target for console command parsing.
//!
//! Parsing never panics, and input without a leading `/` never maps to an
//! event.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrutiny_cli::commands;

fuzz_target!(|line: &str| {
    let command = commands::parse(line);
    let event = command.into_event();
    if !line.trim().starts_with('/') {
        assert!(event.is_none());
    }
});
