mod cli;
mod logging;
mod pipeline;

use clap::Parser;
use cli::Cli;
use ta_core::Result;
use ta_feed::create_source;
use ta_report::CsvReport;

use crate::logging::init_logging;

async fn execute(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let source = create_source(&config.feed);
    let report = CsvReport::new(config.output);
    let summary = pipeline::run(source.as_ref(), &report, &config.stop_words, config.top_k).await?;
    tracing::info!(
        "✨ Top {} of {} articles saved to {}",
        summary.selected,
        summary.fetched,
        summary.destination
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let log = init_logging(cli.verbose);

    if let Err(e) = execute(cli).await {
        log.error(&format!("❌ {}", e));
        std::process::exit(1);
    }
}
