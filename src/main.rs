use clap::Parser;
use std::io::BufWriter;
use std::process::ExitCode;
use wordcache::cli::{Cli, ReportStyle};
use wordcache::error::exit_code;
use wordcache::report::{TableReport, TraceWriter};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(wordcache_err) = e.downcast_ref::<wordcache::Error>() {
                ExitCode::from(wordcache_err.exit_code() as u8)
            } else {
                ExitCode::from(exit_code::GENERAL_ERROR as u8)
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    wordcache::logger::initialize_logger(cli.verbose);

    // Reject the size before touching the file
    let size = cli.validate()?;

    let stdout = BufWriter::new(std::io::stdout().lock());
    let mut trace = TraceWriter::new(stdout);
    if cli.quiet {
        trace = trace.quiet();
    }

    match cli.report {
        ReportStyle::Trace => {
            wordcache::run_file(&cli.file, size, trace)?;
        }
        ReportStyle::Table => {
            wordcache::run_file(&cli.file, size, TableReport::new(trace))?;
        }
    }

    Ok(())
}
