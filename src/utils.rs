use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command};

pub fn setup_logging(verbose: bool) {
    let default_directive = if verbose { "info" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr; stdout is reserved for reports.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    num.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn validate_args(args: &Args) -> anyhow::Result<()> {
    if let Command::Tlds { top, .. } = &args.command {
        if *top == 0 {
            anyhow::bail!("top must be greater than 0");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(10_000_000), "10,000,000");
    }
}
