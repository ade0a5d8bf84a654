//! xcproj-doctor CLI entry point
//!
//! Integrity check for the JJYWave Xcode project, run from the project root.

use xcproj_doctor::checks::get_all_checks;
use xcproj_doctor::cli::args::{Args, Command};
use xcproj_doctor::cli::output::TerminalFormatter;
use xcproj_doctor::data::layout::ProjectLayout;
use xcproj_doctor::engine::orchestrator::ProjectValidator;
use xcproj_doctor::version::get_build_info;
use xcproj_doctor::DoctorError;

use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'xcproj-doctor --help' for usage information.");
            return ExitCode::from(2);
        }
    };

    init_logging(args.verbose);

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match args.command {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List => {
            print_check_list();
            ExitCode::SUCCESS
        }
        Command::Check => run_checks(&args),
    }
}

/// Log events go to stderr; stdout is reserved for the report.
fn init_logging(verbose: bool) {
    let default = if verbose { "xcproj_doctor=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_help() {
    println!(
        r#"xcproj-doctor - Integrity check for the JJYWave Xcode project

USAGE:
    xcproj-doctor [COMMAND] [OPTIONS]

Run from the directory containing JJYWave.xcodeproj.

COMMANDS:
    check       Validate the project in the current directory (default)
    list        List all checks
    version     Print version information

OPTIONS:
    -v, --verbose   Show check IDs, timings and skipped checks
    --no-color      Disable colored output
    -h, --help      Print this help message
    -V, --version   Print version information

ENVIRONMENT:
    NO_COLOR        Disable colored output
    RUST_LOG        Diagnostic log filter (written to stderr)

EXIT CODES:
    0   Project is healthy
    1   Project has integrity issues, or not run from the project root
    2   Invalid arguments
    3   Runtime error"#
    );
}

fn print_check_list() {
    println!("Available checks:");
    println!();
    for check in get_all_checks() {
        println!("  {:<8} {:<28} [{}]", check.id, check.name, check.category);
    }
}

fn run_checks(args: &Args) -> ExitCode {
    let root = match std::env::current_dir().map_err(DoctorError::WorkingDirectory) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    let layout = ProjectLayout::default();
    let color = !args.no_color && std::io::stdout().is_terminal();
    let formatter = TerminalFormatter::new(&layout, color, args.verbose);

    if let Err(e) = layout.ensure_project_root(&root) {
        tracing::debug!(root = %root.display(), error = %e, "precondition failed");
        println!("{}", formatter.not_project_root());
        return ExitCode::from(1);
    }

    println!("{}", formatter.header());

    let validator = ProjectValidator::new(layout);
    let report = validator.run_with(&root, |check| {
        if let Some(line) = formatter.check_line(check) {
            println!("{}", line);
        }
    });

    println!("{}", formatter.summary(&report));

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
