//! Calendar script filter CLI.
//!
//! # Usage
//! ```ignore
//! alc          // Current month
//! alc 2        // February of this year
//! alc 2 2026   // February 2026
//! ```

use std::io::Write;

use anyhow::Context;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use alc::args::{Args, get_current_datetime};
use alc::command::CalendarCommand;
use alc::config::load_or_default;

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("alc: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; stdout carries only the XML document.
fn init_logging(args: &Args) {
    let config = ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build();
    let _ = TermLogger::init(
        args.log_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.apply(load_or_default(args.config.as_deref()));
    let xml = CalendarCommand::new(config).execute_at(get_current_datetime())?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", xml).context("failed to write output")?;
    Ok(())
}
