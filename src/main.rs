use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mcdate::catalog::{CatalogCache, FormatMode, HttpCatalogSource, format, resolver};
use mcdate::config;

#[derive(Parser)]
#[command(name = "mcdate")]
#[command(version, about = "Look up the release date of a Minecraft version")]
struct Cli {
    /// Version id as listed in the version manifest (e.g. "1.20.1")
    // Named to stay clear of the auto-generated --version flag
    #[arg(value_name = "VERSION")]
    version_id: String,

    /// Output format: epoch, or omit for ISO-8601. Any other token selects
    /// a verbose fallback rendering.
    format: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with 2 on bad arguments by default; this tool's contract
    // is exit 1 for every failure, usage errors included. --help and
    // --version are not failures and keep clap's exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if matches!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
        ) {
            err.exit();
        }
        let _ = err.print();
        std::process::exit(1);
    });

    let cache_path = config::cache_path();

    match run(&cli, &cache_path) {
        Ok(Some(line)) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("Version not found: {}", cli.version_id);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error with {}: {}", cache_path.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, cache_path: &Path) -> anyhow::Result<Option<String>> {
    let source = HttpCatalogSource::new(config::MANIFEST_URL);
    let cache = CatalogCache::new(
        cache_path.to_path_buf(),
        Duration::from_millis(config::MAX_SNAPSHOT_AGE_MS),
        source,
    );

    cache.ensure_fresh()?;
    let manifest = cache.read()?;

    let Some(release_date) = resolver::resolve(&manifest, &cli.version_id)? else {
        return Ok(None);
    };

    let mode = FormatMode::from_arg(cli.format.as_deref());
    Ok(Some(format::format_release_date(&release_date, mode)))
}
