use clap::{App, Arg};

#[derive(Debug)]
pub struct AppArgs {
    pub verbose: bool,
}

/// Parses arguments from the command line and returns them as an `AppArgs` struct.
pub fn parse_cli_args() -> AppArgs {
    let matches = App::new("pow2-table")
        .version(clap::crate_version!())
        .author("Adolph C. <adolphc@outlook.com>")
        .about(
            "Prints a uint256 power-of-two to exponent lookup table as assignment statements.\n\
             Without flags the table is the only thing written to stdout.",
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log progress to stderr."),
        )
        .get_matches();

    AppArgs {
        verbose: matches.is_present("verbose"),
    }
}
