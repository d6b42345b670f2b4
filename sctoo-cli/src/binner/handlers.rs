use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use sctoo_binner::{BinnerConfig, bin_variants_from_files, unescape_separator};
use sctoo_core::models::BinRecord;
use sctoo_core::models::fields::parse_bin_fields;
use sctoo_io::write_bins;

///
/// Fold the command line flags into the config; flags win over the file.
///
fn apply_cli_overrides(config: &mut BinnerConfig, matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("only-somatic") {
        config.only_somatic = true;
    }
    if matches.get_flag("parallel") {
        config.parallel = true;
    }
    if let Some(fields) = matches.get_one::<String>("fields") {
        config.output.fields =
            parse_bin_fields(fields).with_context(|| format!("Invalid --fields: {}", fields))?;
    }
    if let Some(sep) = matches.get_one::<String>("sep") {
        config.output.separator = unescape_separator(sep);
    }

    Ok(())
}

fn check_input(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("File not found: {} ({})", path.display(), what);
    }
    Ok(())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

///
/// Print bins as BED-like lines.
///
fn print_bins<W: Write>(bins: &[BinRecord], out: W) -> Result<()> {
    let mut writer = BufWriter::new(out);
    for bin in bins {
        writeln!(writer, "{}", bin.as_bed_line())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn run_binner(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let variants = matches
        .get_one::<String>("variants")
        .expect("A path to a VCF file is required.");

    let intervals = matches
        .get_one::<String>("intervals")
        .expect("A path to an interval file is required.");

    let output = matches.get_one::<String>("out").map(PathBuf::from);

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => BinnerConfig::try_from(Path::new(path))
            .with_context(|| format!("Could not load config {}", path))?,
        None => BinnerConfig::default(),
    };
    apply_cli_overrides(&mut config, matches)?;
    config.validate()?;

    // coerce arguments to types
    let variants = PathBuf::from(variants);
    let intervals = PathBuf::from(intervals);

    check_input(&variants, "variants")?;
    check_input(&intervals, "intervals")?;
    if let Some(output) = &output {
        if output.exists() {
            anyhow::bail!("Aborting: File {} exists.", output.display());
        }
    }

    let pb = spinner();
    pb.set_message(format!(
        "Binning {} into {}",
        variants.display(),
        intervals.display()
    ));
    let bins = bin_variants_from_files(&variants, &intervals, &config)?;
    pb.finish_and_clear();

    log::info!(
        "Counted {} variants in {} bins",
        bins.iter().map(|bin| bin.count as u64).sum::<u64>(),
        bins.len()
    );

    match output {
        Some(output) => write_bins(
            &output,
            &bins,
            &config.output.fields,
            &config.output.separator,
        )?,
        None => {
            log::info!("Writing {} bins to stdout", bins.len());
            print_bins(&bins, std::io::stdout().lock())?
        }
    }

    Ok(())
}
