use anyhow::bail;
use media_restorer::batch::process_folder;
use media_restorer::remux::FfmpegRemuxer;
use media_restorer::time::RussianDateParser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: media_restorer <folder> [<folder>...]

Restores embedded timestamp and GPS metadata for every media file in the
given folders that has a matching *.supplemental-metadata.json sidecar.
Restored copies are written to <folder>/restored/.";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let folders: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();
    if folders.is_empty() {
        bail!("no folders given\n\n{USAGE}");
    }

    let parser = RussianDateParser;
    let remuxer = FfmpegRemuxer::new();

    for folder in &folders {
        let summary = process_folder(folder, &parser, &remuxer)?;
        info!(
            folder = %folder.display(),
            restored = summary.restored,
            skipped = summary.skipped,
            failed = summary.failed,
            "folder complete"
        );
    }

    Ok(())
}
