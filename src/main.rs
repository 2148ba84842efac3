use anyhow::Result;
use clap::Parser;
use tracing::error;

use domainlist::args::{Args, Command};
use domainlist::domain::normalize_candidate;
use domainlist::list::ListError;
use domainlist::{report, utils};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(action = "abort", component = "cli", error = %e, "Run failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Tlds { list, top, json } => {
            let report = report::analyze_tlds(list, *top)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_tld_report(&report, list);
            }
            Ok(())
        }

        Command::Rank { domain, list } => {
            let Some(domain) = domain else {
                println!("Usage: domainlist rank <domain>");
                println!("Example: domainlist rank google.com");
                std::process::exit(1);
            };
            let candidate = normalize_candidate(domain);

            match report::search_rank(list, &candidate) {
                Ok(outcome) => {
                    report::print_rank_outcome(&candidate, &outcome);
                    Ok(())
                }
                // A missing list degrades to "not found" instead of aborting.
                Err(err @ ListError::Access { .. }) => {
                    println!("Error: {err}");
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        }

        Command::Competitors { domains, list } => {
            if domains.is_empty() {
                println!("Usage: domainlist competitors <domain>...");
                println!("Example: domainlist competitors amazon.com ebay.com");
                std::process::exit(1);
            }

            let mut targets: Vec<String> = Vec::new();
            for domain in domains {
                let candidate = normalize_candidate(domain);
                if !targets.contains(&candidate) {
                    targets.push(candidate);
                }
            }

            let report = report::search_competitors(list, &targets)?;
            report::print_competitor_report(&report);
            Ok(())
        }
    }
}
