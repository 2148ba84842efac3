use serde::Serialize;
use std::collections::HashMap;

use crate::domain::DomainRecord;

#[derive(Debug, Clone, Copy)]
struct TldEntry {
    count: u64,
    first_seen: u64,
}

/// Running TLD occurrence counts over a single pass of a domain list.
#[derive(Debug, Default)]
pub struct TldTally {
    counts: HashMap<String, TldEntry>,
    total: u64,
    skipped: u64,
}

impl TldTally {
    /// Tally the record's TLD. Records without a period are skipped and do
    /// not count toward the total.
    pub fn observe(&mut self, record: &DomainRecord) {
        match record.tld() {
            Some(tld) => {
                let first_seen = self.total;
                let entry = self
                    .counts
                    .entry(tld.to_string())
                    .or_insert(TldEntry { count: 0, first_seen });
                entry.count += 1;
                self.total += 1;
            }
            None => self.skipped += 1,
        }
    }

    /// Note a line that never became a record (empty after trimming).
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Rank tallied TLDs by descending count, ties kept in first-encountered
    /// order, truncated to the `top` most frequent.
    pub fn into_report(self, top: usize) -> TldReport {
        let total = self.total;
        let distinct = self.counts.len();
        let skipped = self.skipped;

        let mut entries: Vec<(String, TldEntry)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });

        let top = entries
            .into_iter()
            .take(top)
            .map(|(tld, entry)| TldShare {
                tld,
                count: entry.count,
                percentage: if total == 0 {
                    0.0
                } else {
                    entry.count as f64 / total as f64 * 100.0
                },
            })
            .collect();

        TldReport {
            total_domains: total,
            distinct_tlds: distinct,
            skipped_lines: skipped,
            top,
        }
    }
}

/// One row of the ranked TLD table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TldShare {
    pub tld: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct TldReport {
    pub total_domains: u64,
    pub distinct_tlds: usize,
    pub skipped_lines: u64,
    pub top: Vec<TldShare>,
}

/// Outcome of a rank scan over an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    Found { rank: u64 },
    NotFound { scanned: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorRank {
    pub domain: String,
    pub rank: u64,
}

/// Result of a single-pass lookup of several domains: hits in ascending
/// rank order, the candidates never seen, and how many were requested.
#[derive(Debug)]
pub struct CompetitorReport {
    pub found: Vec<CompetitorRank>,
    pub missing: Vec<String>,
    pub requested: usize,
}
