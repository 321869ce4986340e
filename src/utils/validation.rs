// Validation utilities
// Author: Gabriel Demetrios Lafis

/// Validate that a numeric value is in range
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
    name: &str,
) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("'{}' must be between {} and {}", name, min, max))
    } else {
        Ok(())
    }
}

/// Match user input against the accepted choices, ignoring case and
/// surrounding whitespace. Returns the normalized input.
pub fn validate_choice(input: &str, accepted: &[&str], allow_all: bool) -> Option<String> {
    let normalized = input.trim().to_lowercase();

    if (allow_all && normalized == "all") || accepted.contains(&normalized.as_str()) {
        Some(normalized)
    } else {
        None
    }
}

/// Page size for the raw data browser: numbers are clamped to
/// `[min, max]`, anything else falls back to `default`.
pub fn parse_page_size(input: &str, default: usize, min: usize, max: usize) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) => n.clamp(min as i64, max as i64) as usize,
        Err(_) => default,
    }
}
