//! Recovery of the journal kind from NetBox display strings.
//!
//! The GraphQL API does not expose `kind` on journal entries, only a
//! human-readable `display` such as `"2025-07-29 08:00 (Info)"`. The kind is
//! recovered heuristically; the rules are tried in a fixed order and later
//! rules only apply when earlier patterns do not match.

/// Extracts the kind label embedded in a NetBox display string.
///
/// Rules, first match wins:
///
/// 1. empty input yields an empty string;
/// 2. text between the last `(` and a later last `)`;
/// 3. text before the first `:`;
/// 4. around the first `" - "`: when the left side looks like a
///    `YYYY-MM-DD` date, the remainder (cut at its first `:`), otherwise the
///    left side;
/// 5. the first whitespace-separated word;
/// 6. the input unchanged.
///
/// # Examples
///
/// ```
/// use nbjrnlctl::netbox::extract_kind;
///
/// assert_eq!(extract_kind("2025-07-29 08:00 (Info)"), "Info");
/// assert_eq!(extract_kind("Warning: link down"), "Warning");
/// assert_eq!(extract_kind("2025-07-29 - reboot performed"), "reboot performed");
/// assert_eq!(extract_kind("singleword"), "singleword");
/// ```
pub fn extract_kind(display: &str) -> String {
    if display.is_empty() {
        return String::new();
    }

    if let Some(open) = display.rfind('(') {
        if let Some(close) = display.rfind(')') {
            if close > open {
                return display[open + 1..close].trim().to_string();
            }
        }
    }

    if let Some(colon) = display.find(':') {
        return display[..colon].trim().to_string();
    }

    if let Some(dash) = display.find(" - ") {
        let head = &display[..dash];
        let parts: Vec<&str> = head.split('-').collect();
        if parts.len() == 3 && parts[0].len() == 4 {
            // Date prefix, the kind (if any) is in the remainder.
            let rest = display[dash + 3..].trim();
            return match rest.find(':') {
                Some(colon) => rest[..colon].trim().to_string(),
                None => rest.to_string(),
            };
        }
        return head.trim().to_string();
    }

    match display.split_whitespace().next() {
        Some(word) => word.to_string(),
        None => display.to_string(),
    }
}
