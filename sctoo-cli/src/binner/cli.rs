use clap::{ArgAction, Command, arg};

pub use sctoo_binner::consts::*;

pub fn create_binner_cli() -> Command {
    Command::new(BINNER_CMD)
        .author("Julian Flesch")
        .about("Bin variants presented in VCF files by intervals from BED or CSV files.")
        .arg(
            arg!(-v --variants <variants> "Path to a sorted VCF file with variants (.vcf or .vcf.gz)")
                .required(true),
        )
        .arg(
            arg!(-i --intervals <intervals> "Path to sorted gene intervals (.bed, .csv or .tsv, optionally gzipped)")
                .required(true),
        )
        .arg(
            arg!(-o --out <out> "Path to a .bed/.csv/.tsv file to write the bins to. Prints BED-like lines if omitted")
                .visible_alias("output"),
        )
        .arg(
            arg!(--"only-somatic" "Include only somatic variants, as annotated by VarScan2")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(--fields <fields> "Comma separated columns of delimited output, e.g. ID,CHR,START,END,COUNT"))
        .arg(arg!(--sep <sep> "Column separator of delimited output; \\t for tabs"))
        .arg(arg!(-c --config <config> "Path to a TOML config file; flags take precedence"))
        .arg(
            arg!(--parallel "Count each chromosome on its own thread")
                .action(ArgAction::SetTrue),
        )
}
