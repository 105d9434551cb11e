//! Log Redaction Layer
//!
//! Scrubs provider API keys and bearer tokens from strings prior to
//! logging. Upstream error bodies sometimes echo request headers back;
//! those must not reach the log files.

use regex::Regex;
use std::sync::LazyLock;

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(gsk_[a-zA-Z0-9]{20,})|(sk-[a-zA-Z0-9]{32,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)")
        .unwrap()
});

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    API_KEY_RE.replace_all(input, "[REDACTED_TOKEN]").to_string()
}
