use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::list::{self, ListError, PROGRESS_INTERVAL};
use crate::stats::{CompetitorReport, RankOutcome, TldReport};
use crate::utils::format_number;

pub fn analyze_tlds(path: &Path, top: usize) -> Result<TldReport, ListError> {
    let start_time = Instant::now();
    info!(action = "start", component = "tld_analysis", path = ?path, top, "Starting TLD analysis");

    let lines = list::open_list(path)?;
    let tally = list::tally_tlds(lines)?;
    let report = tally.into_report(top);

    info!(
        action = "complete",
        component = "tld_analysis",
        duration_ms = start_time.elapsed().as_millis(),
        "TLD analysis completed"
    );
    Ok(report)
}

pub fn print_tld_report(report: &TldReport, path: &Path) {
    println!("Analyzing TLDs in: {}", path.display());
    println!("{}", "-".repeat(60));

    println!(
        "\nTotal domains analyzed: {}",
        format_number(report.total_domains)
    );
    println!(
        "Lines skipped (no TLD): {}",
        format_number(report.skipped_lines)
    );

    println!("\nTop {} TLDs:\n", report.top.len());
    println!(
        "{:<6} {:<10} {:<12} {:<12}",
        "Rank", "TLD", "Count", "Percentage"
    );
    println!("{}", "-".repeat(60));

    for (position, share) in report.top.iter().enumerate() {
        println!(
            "{:<6} .{:<9} {:<12} {:>9.2}%",
            position + 1,
            share.tld,
            format_number(share.count),
            share.percentage
        );
    }
}

pub fn search_rank(path: &Path, candidate: &str) -> Result<RankOutcome, ListError> {
    println!("Searching for: {candidate}");
    println!("In file: {}", path.display());
    println!("{}", "-".repeat(50));

    let lines = list::open_list(path)?;
    list::find_rank(lines, candidate, PROGRESS_INTERVAL, |scanned| {
        println!("  Searched {} domains...", format_number(scanned));
    })
}

pub fn print_rank_outcome(candidate: &str, outcome: &RankOutcome) {
    match outcome {
        RankOutcome::Found { rank } => {
            println!("✓ Found: {candidate}");
            println!("  Rank: #{}", format_number(*rank));
        }
        RankOutcome::NotFound { scanned } => {
            println!(
                "✗ Domain not found ({} domains scanned)",
                format_number(*scanned)
            );
        }
    }
}

pub fn search_competitors(path: &Path, targets: &[String]) -> Result<CompetitorReport, ListError> {
    println!(
        "Searching for {} competitors in: {}",
        targets.len(),
        path.display()
    );
    println!("{}", "-".repeat(60));

    let lines = list::open_list(path)?;
    list::find_competitors(lines, targets)
}

pub fn print_competitor_report(report: &CompetitorReport) {
    for hit in &report.found {
        println!(
            "✓ Found: {:<30} Rank: #{}",
            hit.domain,
            format_number(hit.rank)
        );
    }

    if !report.missing.is_empty() {
        println!("\n✗ Not found:");
        for domain in &report.missing {
            println!("  - {domain}");
        }
    }

    println!("\nSummary:");
    println!(
        "  Found: {}/{} competitors",
        report.found.len(),
        report.requested
    );
}
