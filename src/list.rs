use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

use crate::domain::DomainRecord;
use crate::stats::{CompetitorRank, CompetitorReport, RankOutcome, TldTally};

/// Lines between progress markers during a rank scan.
pub const PROGRESS_INTERVAL: u64 = 10_000_000;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot open domain list {path}: {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed reading domain list: {0}")]
    Read(#[from] io::Error),
}

/// Open a domain list for a single sequential pass. The handle is released
/// when the returned iterator is dropped.
pub fn open_list(path: &Path) -> Result<impl Iterator<Item = io::Result<String>>, ListError> {
    let file = File::open(path).map_err(|source| ListError::Access {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file).lines())
}

/// Tally TLD occurrences across every line of a list.
pub fn tally_tlds<I>(lines: I) -> Result<TldTally, ListError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let start_time = Instant::now();
    info!(action = "start", component = "tld_tally", "Starting TLD tally");

    let mut tally = TldTally::default();
    for line in lines {
        let line = line?;
        match DomainRecord::parse(&line) {
            Some(record) => tally.observe(&record),
            None => tally.skip(),
        }
    }

    info!(
        action = "complete",
        component = "tld_tally",
        total_domains = tally.total(),
        distinct_tlds = tally.distinct(),
        skipped_lines = tally.skipped(),
        duration_ms = start_time.elapsed().as_millis(),
        "TLD tally completed"
    );
    Ok(tally)
}

/// Scan an ordered list for the first line equal to `candidate`.
///
/// Lines are trimmed before the comparison but never case-folded; callers
/// normalize the candidate. The scan stops at the first match without
/// reading further lines. `on_progress` fires at every multiple of
/// `progress_interval` lines scanned without a match.
pub fn find_rank<I, F>(
    lines: I,
    candidate: &str,
    progress_interval: u64,
    mut on_progress: F,
) -> Result<RankOutcome, ListError>
where
    I: Iterator<Item = io::Result<String>>,
    F: FnMut(u64),
{
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "rank_scan",
        candidate = candidate,
        "Starting rank scan"
    );

    let mut scanned: u64 = 0;
    for line in lines {
        let line = line?;
        scanned += 1;

        if line.trim() == candidate {
            info!(
                action = "complete",
                component = "rank_scan",
                rank = scanned,
                duration_ms = start_time.elapsed().as_millis(),
                "Domain found"
            );
            return Ok(RankOutcome::Found { rank: scanned });
        }

        if progress_interval > 0 && scanned % progress_interval == 0 {
            on_progress(scanned);
        }
    }

    info!(
        action = "complete",
        component = "rank_scan",
        scanned,
        duration_ms = start_time.elapsed().as_millis(),
        "Domain not found"
    );
    Ok(RankOutcome::NotFound { scanned })
}

/// Record the rank of the first occurrence of each target in one pass.
/// The scan ends early once every target has been seen.
pub fn find_competitors<I>(lines: I, targets: &[String]) -> Result<CompetitorReport, ListError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "competitor_scan",
        target_count = targets.len(),
        "Starting competitor scan"
    );

    let mut found: Vec<CompetitorRank> = Vec::new();
    let mut rank: u64 = 0;

    for line in lines {
        let line = line?;
        rank += 1;
        let current = line.trim();

        if targets.iter().any(|t| t.as_str() == current)
            && !found.iter().any(|f| f.domain == current)
        {
            found.push(CompetitorRank {
                domain: current.to_string(),
                rank,
            });
            if found.len() == targets.len() {
                break;
            }
        }
    }

    let missing: Vec<String> = targets
        .iter()
        .filter(|t| !found.iter().any(|f| &f.domain == *t))
        .cloned()
        .collect();

    info!(
        action = "complete",
        component = "competitor_scan",
        found = found.len(),
        missing = missing.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Competitor scan completed"
    );

    Ok(CompetitorReport {
        found,
        missing,
        requested: targets.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn lines(input: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        input
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
            .map(Ok)
    }

    #[test]
    fn rank_of_first_match() {
        let outcome = find_rank(lines(&["example.com"]), "example.com", 0, |_| {}).unwrap();
        assert_eq!(outcome, RankOutcome::Found { rank: 1 });
    }

    #[test]
    fn rank_scan_stops_at_first_match() {
        let consumed = Cell::new(0u64);
        let counting = lines(&["a.com", "b.com", "c.com", "d.com"]).inspect(|_| {
            consumed.set(consumed.get() + 1);
        });

        let outcome = find_rank(counting, "b.com", 0, |_| {}).unwrap();

        assert_eq!(outcome, RankOutcome::Found { rank: 2 });
        assert_eq!(consumed.get(), 2);
    }

    #[test]
    fn rank_not_found_scans_every_line_once() {
        let consumed = Cell::new(0u64);
        let counting = lines(&["a.com", "b.com"]).inspect(|_| {
            consumed.set(consumed.get() + 1);
        });

        let outcome = find_rank(counting, "z.com", 0, |_| {}).unwrap();

        assert_eq!(outcome, RankOutcome::NotFound { scanned: 2 });
        assert_eq!(consumed.get(), 2);
    }

    #[test]
    fn rank_comparison_is_case_sensitive() {
        let outcome = find_rank(lines(&["Example.com"]), "example.com", 0, |_| {}).unwrap();
        assert_eq!(outcome, RankOutcome::NotFound { scanned: 1 });
    }

    #[test]
    fn rank_compares_trimmed_lines() {
        let outcome = find_rank(lines(&["  example.com  "]), "example.com", 0, |_| {}).unwrap();
        assert_eq!(outcome, RankOutcome::Found { rank: 1 });
    }

    #[test]
    fn progress_fires_at_interval_multiples() {
        let mut marks = Vec::new();
        let outcome = find_rank(
            lines(&["a.com", "b.com", "c.com", "d.com", "e.com"]),
            "z.com",
            2,
            |scanned| marks.push(scanned),
        )
        .unwrap();

        assert_eq!(outcome, RankOutcome::NotFound { scanned: 5 });
        assert_eq!(marks, vec![2, 4]);
    }

    #[test]
    fn progress_not_emitted_for_matching_line() {
        let mut marks = Vec::new();
        let outcome = find_rank(lines(&["a.com", "b.com"]), "b.com", 2, |scanned| {
            marks.push(scanned)
        })
        .unwrap();

        assert_eq!(outcome, RankOutcome::Found { rank: 2 });
        assert!(marks.is_empty());
    }

    #[test]
    fn open_list_missing_file_is_access_error() {
        let err = open_list(Path::new("/nonexistent/domains.csv")).err().unwrap();
        assert!(matches!(err, ListError::Access { .. }));
    }

    #[test]
    fn tally_counts_only_lines_with_period() {
        let tally = tally_tlds(lines(&["a.com", "", "localhost", "b.org", "c.com"])).unwrap();
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.distinct(), 2);
        assert_eq!(tally.skipped(), 2);
    }

    #[test]
    fn competitors_reports_ranks_and_missing() {
        let report = find_competitors(
            lines(&["amazon.com", "ebay.com", "walmart.com"]),
            &["ebay.com".to_string(), "etsy.com".to_string()],
        )
        .unwrap();

        assert_eq!(
            report.found,
            vec![CompetitorRank {
                domain: "ebay.com".to_string(),
                rank: 2,
            }]
        );
        assert_eq!(report.missing, vec!["etsy.com".to_string()]);
        assert_eq!(report.requested, 2);
    }

    #[test]
    fn competitor_scan_ends_once_all_found() {
        let consumed = Cell::new(0u64);
        let counting = lines(&["a.com", "b.com", "c.com", "d.com"]).inspect(|_| {
            consumed.set(consumed.get() + 1);
        });

        let report =
            find_competitors(counting, &["a.com".to_string(), "b.com".to_string()]).unwrap();

        assert_eq!(report.found.len(), 2);
        assert!(report.missing.is_empty());
        assert_eq!(consumed.get(), 2);
    }
}
