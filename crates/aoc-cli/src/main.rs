use clap::Parser;

mod cli;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("aocplot error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = aoc_config::PlotConfig::load_with_dotenv()?.with_overrides(cli.overrides())?;
    tracing::debug!(?config, "resolved configuration");

    let summary = pipeline::run(&config)?;
    tracing::info!(
        charts = summary.charts.len(),
        tables = summary.tables.is_some(),
        "done"
    );
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AOCPLOT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
