use std::io::Write;

use crate::config::Config;

pub fn run(config: &Config, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Hello {}", config.get("name"))
}
