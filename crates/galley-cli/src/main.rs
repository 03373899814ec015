//! Build-time entry point: load tables, enrich, export bundles.
//!
//! Exit status is the whole contract: 0 with all bundle files written, or
//! nonzero with the failure on stderr and no partial output.

use clap::Parser;
use galley_bundle::{build_all, export_bundles};
use galley_data::load_dataset;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "galley", about = "Build denormalized JSON bundles from raw game data tables")]
struct Args {
    /// Directory containing the raw data tables.
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Directory the bundle files are written to.
    #[arg(long, default_value = "bundles")]
    out: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_dataset(&args.data)?;
    log::info!(
        "loaded {} dishes, {} ingredients, {} parties from {}",
        dataset.dishes.len(),
        dataset.ingredients.len(),
        dataset.parties.len(),
        args.data.display()
    );

    let bundles = build_all(&dataset);
    export_bundles(&bundles, &args.out, args.pretty)?;
    log::info!("wrote bundles to {}", args.out.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
