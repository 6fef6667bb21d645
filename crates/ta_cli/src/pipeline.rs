use ta_core::{Entry, FeedSource, ReportRecord, ReportSink, Result};
use ta_rank::{normalize, rank, NormalizedTitle, StopWords, TitleScore};

use crate::logging::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub selected: usize,
    pub destination: String,
}

/// Report rows for the selected scores, in selection order.
pub fn build_records(entries: &[Entry], selection: &[TitleScore]) -> Vec<ReportRecord> {
    selection
        .iter()
        .map(|score| ReportRecord::from_entry(&entries[score.index], score.weight))
        .collect()
}

/// Fetch, normalize, rank and write, one stage after the other.
pub async fn run(
    source: &dyn FeedSource,
    sink: &dyn ReportSink,
    stop_words: &StopWords,
    top_k: usize,
) -> Result<RunSummary> {
    let log = Logger::new().with_prefix("[fetch]");
    let entries = source.fetch_entries().await?;
    log.info(&format!("📰 {} entries from {}", entries.len(), source.name()));

    let log = Logger::new().with_prefix("[rank]");
    let titles: Vec<NormalizedTitle> = entries
        .iter()
        .map(|entry| normalize(&entry.title, stop_words))
        .collect();
    let ranking = rank(&titles, top_k);
    log.info(&format!(
        "🔢 {} distinct words, {} of {} titles selected",
        ranking.frequencies.len(),
        ranking.selection.len(),
        entries.len()
    ));
    for score in &ranking.selection {
        log.debug(&format!("{:>4} {}", score.weight, entries[score.index].title));
    }

    let log = Logger::new().with_prefix("[report]");
    let records = build_records(&entries, &ranking.selection);
    sink.write_report(&records)?;
    log.info(&format!("💾 {} rows written to {}", records.len(), sink.destination()));

    Ok(RunSummary {
        fetched: entries.len(),
        selected: records.len(),
        destination: sink.destination(),
    })
}
