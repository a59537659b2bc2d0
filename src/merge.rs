use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the merge of a statistics export.
pub fn parse_cli() -> (PathBuf, Option<PathBuf>) {
    let arg_jsonout = Arg::with_name("output_jsonfile")
        .help("json document to merge the new statistics into")
        .short("o")
        .long("output")
        .takes_value(true)
        .required(true);
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("csv export with the new statistics, read from stdin if not given")
        .short("i")
        .long("input")
        .takes_value(true);
    let cli_args = App::new("dnstats_merge")
        .version(VERSION.unwrap_or("unknown"))
        .author("Max Resing")
        .about("cli app to merge new statistics exports into the chartjs time series document")
        .arg(arg_jsonout)
        .arg(arg_csvin)
        .get_matches();
    let jsonout = PathBuf::from(cli_args.value_of("output_jsonfile").unwrap_or_default());
    let csvin = cli_args.value_of("input_csvfile").map(PathBuf::from);
    return (jsonout, csvin);
}
