mod cli;
mod errors;
mod format;
mod table;

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::{BufWriter, Write};

fn main() {
    let args = cli::parse_cli_args();

    Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    if let Err(err) = run() {
        if is_broken_pipe(&err) {
            log::debug!("stdout closed before the table was complete");
            return;
        }
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    log::debug!("generating 2^0..2^{} lookup table", table::TABLE_BITS - 1);
    let lines = format::write_table(&mut output, table::entries())?;
    output.flush()?;
    log::debug!("wrote {} lines", lines);

    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .map(|io_err| io_err.kind() == std::io::ErrorKind::BrokenPipe)
            .unwrap_or(false)
    })
}
