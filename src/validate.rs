//! Pure, synchronous input validators.
//!
//! Each validator is a standalone function `&str -> Result<(), String>`
//! so it can be run on every change and again on submit with identical
//! results. The `Err` string is the field-level message shown inline.

/// Structural email check: one `@`, non-empty local and domain parts,
/// a dotted domain, no whitespace.
///
/// # Errors
///
/// Returns a human-readable reason when the input is not an email.
pub fn email(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("email address is required".to_string());
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err("email address must not contain spaces".to_string());
    }
    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("email address must contain exactly one '@'".to_string());
    };
    if local.is_empty() || domain.is_empty() {
        return Err("email address is missing a part around '@'".to_string());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("email domain must contain a dot".to_string());
    }
    Ok(())
}

/// Trimmed non-empty check.
///
/// # Errors
///
/// Returns a reason when the input is empty or whitespace-only.
pub fn non_empty(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("a value is required".to_string());
    }
    Ok(())
}

/// Parseable integer within `[min, max]` inclusive.
///
/// # Errors
///
/// Returns a reason when the input is not an integer or is out of range.
pub fn int_in_range(input: &str, min: i64, max: i64) -> Result<(), String> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| "must be a whole number".to_string())?;
    if value < min || value > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
