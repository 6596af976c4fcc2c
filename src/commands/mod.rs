pub mod hello;
pub mod repo;

use std::io::Write;

pub const USAGE_HINT: &str = "Use 'gh-glance tui' to launch the TUI.";

/// Handler for the bare root command.
pub fn root(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{USAGE_HINT}")
}
