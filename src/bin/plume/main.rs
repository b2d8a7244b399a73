use std::io::Write;

use clap::Parser;
use proc_exit::prelude::*;

mod args;
mod check;
mod debug;
mod init;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    init_logging(&cli.verbose, colored_stderr);

    cli.command
        .run()
        .map_err(|e| format!("{e:#}"))
        .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

fn init_logging(
    level: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
    colored: bool,
) {
    let Some(level) = level.log_level() else {
        return;
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.to_level_filter());
    builder.format(move |buf, record| {
        let style = if colored {
            level_style(record.level())
        } else {
            anstyle::Style::new()
        };
        let level = record.level().as_str().to_lowercase();
        writeln!(buf, "{style}[{level}]{style:#} {}", record.args())
    });
    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    let color = match level {
        log::Level::Error => anstyle::AnsiColor::Red,
        log::Level::Warn => anstyle::AnsiColor::Yellow,
        log::Level::Info => anstyle::AnsiColor::Green,
        log::Level::Debug => anstyle::AnsiColor::Blue,
        log::Level::Trace => anstyle::AnsiColor::Cyan,
    };
    anstyle::Style::new().fg_color(Some(color.into())).bold()
}
