use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use sqltrace::styling::eprintln;
use sqltrace::trace::{self, TraceError};
use sqltrace::xml;

#[derive(Parser)]
#[command(name = "sqltrace")]
#[command(about = "Summary statistics for SQL Server XML trace files", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the trace XML file
    file: PathBuf,

    /// Enable verbose output (show pipeline debug info)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --verbose flag or RUST_LOG env var
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "off" }),
    )
    .format(|buf, record| {
        use anstyle::Style;
        use std::io::Write;

        let dim = Style::new().dimmed();
        writeln!(buf, "{dim}[{}]{dim:#} {}", record.target(), record.args())
    })
    .init();

    if let Err(e) = run(&cli.file) {
        // Error messages are already formatted with emoji and colors
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(path: &Path) -> Result<(), TraceError> {
    let source = std::fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = xml::parse_document(&source)?;
    let events = trace::filter_events(trace::extract_events(&document)?);
    let summary = trace::summarize(&events)?;
    print!("{}", trace::render_summary(&summary));
    Ok(())
}
