use std::io;
use std::process;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use promptdata::cli::{execute_command, output, Cli, CliError};
use promptdata::config::Settings;
use promptdata::infrastructure::di::ServiceContainer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        return;
    }

    let request = match cli.request() {
        Ok(request) => request,
        Err(e) => exit_with(e),
    };

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(CliError::from(e)),
    };

    let container = ServiceContainer::new(settings);
    setup_logging(cli.debug, container.settings.log_filter());
    if !container.settings.color {
        colored::control::set_override(false);
    }
    if !cli.extra.is_empty() {
        output::warning(&format!("ignoring extra arguments: {}", cli.extra.join(" ")));
    }

    if let Err(e) = execute_command(&request, &container) {
        exit_with(e);
    }
}

fn exit_with(e: CliError) -> ! {
    let code = e.exit_code();
    match &e {
        CliError::Usage(usage) => output::info(usage),
        other => output::error(other),
    }
    process::exit(code);
}

fn setup_logging(verbosity: u8, configured: LevelFilter) {
    let filter = match verbosity {
        0 => configured,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
