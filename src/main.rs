use anyhow::{Context, Result};
use argh::FromArgs;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};
use virtual_classroom::Interpreter;

#[derive(FromArgs)]
/// Manage classrooms, students and assignments from the command line.
struct Args {
    #[argh(option)]
    /// read commands from this file instead of the interactive prompt.
    script: Option<PathBuf>,

    #[argh(option, default = "String::from(\"classroom> \")")]
    /// prompt shown before each interactive command.
    prompt: String,

    #[argh(switch, short = 'q')]
    /// only log warnings and errors.
    quiet: bool,
}

/// Logs go to stderr so stdout carries nothing but operator messages.
/// `RUST_LOG` wins over `--quiet`.
fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_tracing(args.quiet);

    tracing::info!("Virtual Classroom Manager started.");
    let mut session = Interpreter::default();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can't open script {}", path.display()))?;
            session.run(BufReader::new(file), std::io::stdout().lock())?;
        }
        None => session
            .repl(&args.prompt)
            .context("line editor failed")?,
    }

    tracing::info!(
        classrooms = session.directory().len(),
        "Virtual Classroom Manager stopped."
    );
    Ok(())
}
