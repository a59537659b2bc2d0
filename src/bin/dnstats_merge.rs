use dnstats::error::MergeResult;
use dnstats::merge::parse_cli;
use dnstats::table::Table;
use dnstats::{load_raw, Document};
use log::{error, info};
use std::path::Path;

fn main() {
    env_logger::init();
    let (jsonout, csvin) = parse_cli();
    let source = match csvin.as_ref() {
        Some(p) => String::from(p.to_str().unwrap()),
        None => String::from("stdin"),
    };
    println!(
        "merge statistics from {} into {}",
        source,
        jsonout.to_str().unwrap()
    );
    if let Err(e) = run(&jsonout, csvin.as_deref()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(jsonout: &Path, csvin: Option<&Path>) -> MergeResult<()> {
    let raw = load_raw(csvin)?;
    let table = Table::from_csv(&raw)?;
    let mut document = Document::from_json_file(jsonout)?;
    document.merge(&table)?;
    document.to_json_file(jsonout)?;
    info!(
        "document now holds {} labels over {} series",
        document.labels.len(),
        document.series.len()
    );
    Ok(())
}
