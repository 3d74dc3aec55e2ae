//! Input checks for values sent to the controller.
//!
//! The controller accepts out-of-range values silently (truncating names,
//! clamping brightness), so these checks catch mistakes before a call is made.

use std::collections::HashSet;

use luxor_api::types::{MAX_INTENSITY, MAX_NAME_LENGTH, MAX_THEME_INDEX};

use crate::error::LuxorError;

/// Trims a group or theme name and checks it fits the controller's limit.
pub fn validate_name(input: &str) -> Result<String, LuxorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LuxorError::InvalidInput("name must not be empty".to_string()));
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err(LuxorError::InvalidInput(format!(
            "name {:?} contains control characters",
            trimmed
        )));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(LuxorError::InvalidInput(format!(
            "name {:?} exceeds maximum length of {} bytes",
            trimmed, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_intensity(intensity: u8) -> Result<u8, LuxorError> {
    if intensity > MAX_INTENSITY {
        return Err(LuxorError::InvalidInput(format!(
            "intensity {} is above the maximum of {}",
            intensity, MAX_INTENSITY
        )));
    }
    Ok(intensity)
}

pub fn validate_theme_index(index: u8) -> Result<u8, LuxorError> {
    if index > MAX_THEME_INDEX {
        return Err(LuxorError::InvalidInput(format!(
            "theme index {} is above the maximum of {}",
            index, MAX_THEME_INDEX
        )));
    }
    Ok(index)
}

/// The letter the app shows for a theme index (`0` is `A`).
pub fn theme_letter(index: u8) -> Result<char, LuxorError> {
    let index = validate_theme_index(index)?;
    Ok(char::from(b'A' + index))
}

/// Parses a theme given either as a letter (`A`-`Z`, any case) or an index.
pub fn parse_theme(input: &str) -> Result<u8, LuxorError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return Ok(c.to_ascii_uppercase() as u8 - b'A');
        }
    }
    let index: u8 = trimmed.parse().map_err(|_| {
        LuxorError::InvalidInput(format!(
            "theme {:?} is neither a letter A-Z nor an index 0-{}",
            input, MAX_THEME_INDEX
        ))
    })?;
    validate_theme_index(index)
}

/// Checks that `proposed` lists every entry of `current` exactly once, which
/// the controller requires of `GroupListReorder` and `ThemeListReorder`.
pub fn validate_reorder(current: &[u8], proposed: &[u8]) -> Result<(), LuxorError> {
    let mut seen = HashSet::new();
    for value in proposed {
        if !seen.insert(*value) {
            return Err(LuxorError::InvalidInput(format!(
                "{} appears more than once in the new order",
                value
            )));
        }
    }
    let existing: HashSet<u8> = current.iter().copied().collect();
    if let Some(extra) = proposed.iter().find(|v| !existing.contains(*v)) {
        return Err(LuxorError::InvalidInput(format!("{} does not exist", extra)));
    }
    if let Some(missing) = current.iter().find(|v| !seen.contains(*v)) {
        return Err(LuxorError::InvalidInput(format!(
            "{} is missing from the new order",
            missing
        )));
    }
    Ok(())
}
