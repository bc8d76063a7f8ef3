use crate::error::ConfigError;

// ============================================================================
// Utility Functions
// ============================================================================

/// Parse human-readable size strings (e.g., "512M", "2G")
///
/// Supports suffixes: B, KB, MB, GB, TB (case-insensitive)
/// Examples: "1024", "512M", "2.5G"
pub fn parse_size(size_str: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidSize {
        value: size_str.to_string(),
        reason: reason.to_string(),
    };

    let size_str = size_str.trim();
    if size_str.is_empty() {
        return Err(invalid("empty size specification"));
    }

    // Split into numeric part and suffix
    let (num_str, suffix) =
        if let Some(pos) = size_str.find(|c: char| !c.is_ascii_digit() && c != '.') {
            (&size_str[..pos], &size_str[pos..])
        } else {
            (size_str, "")
        };

    // Parse the numeric value
    let num: f64 = num_str
        .parse()
        .map_err(|e| invalid(&format!("invalid number: {}", e)))?;

    if num < 0.0 {
        return Err(invalid("size cannot be negative"));
    }

    // Determine multiplier based on suffix
    let multiplier = match suffix.to_lowercase().as_str() {
        "" | "b" => 1.0,
        "k" | "kb" => 1024.0,
        "m" | "mb" => 1024.0 * 1024.0,
        "g" | "gb" => 1024.0 * 1024.0 * 1024.0,
        "t" | "tb" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        _ => return Err(invalid(&format!("unknown size suffix: {}", suffix))),
    };

    let size = num * multiplier;
    if size > u64::MAX as f64 {
        return Err(invalid("size value out of range"));
    }

    Ok(size as u64)
}
