/// A single trimmed, non-empty line from a domain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord(String);

impl DomainRecord {
    /// Parse a raw line, returning `None` for lines that are empty after
    /// trimming.
    pub fn parse(line: &str) -> Option<DomainRecord> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(DomainRecord(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The substring after the final period, or `None` when the record
    /// contains no period. A record ending in a period yields the empty TLD.
    pub fn tld(&self) -> Option<&str> {
        self.0.rfind('.').map(|last_dot| &self.0[last_dot + 1..])
    }
}

/// Candidate domains are normalized before any comparison; list lines are
/// trimmed but never case-folded.
pub fn normalize_candidate(raw: &str) -> String {
    raw.trim().to_lowercase()
}
