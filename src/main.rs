use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use eink_mono::convert;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
struct Args {
    file: PathBuf,
    out_file: PathBuf,
    #[clap(long)]
    dithered_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(LevelFilter::INFO).init();
    let args = Args::parse();

    convert(&args.file, &args.out_file, args.dithered_file.as_deref())?;
    Ok(())
}
