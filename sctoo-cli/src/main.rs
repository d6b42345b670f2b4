#[cfg(feature = "binner")]
mod binner;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "sctoo";
    pub const BIN_NAME: &str = "sctoo";
}

fn build_parser() -> Command {
    let app = Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Julian Flesch")
        .about("Sctoo tools for binning genomic variants into gene intervals.")
        .subcommand_required(true);

    #[cfg(feature = "binner")]
    let app = app.subcommand(binner::cli::create_binner_cli());

    app
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // BINNER
        //
        #[cfg(feature = "binner")]
        Some((binner::cli::BINNER_CMD, matches)) => {
            binner::handlers::run_binner(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
