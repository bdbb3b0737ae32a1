//! Degrade-to-default numeric parsing for the interactive input boundary.
//!
//! Session code prompting for numbers must never abort the session over a
//! typo: a value that fails to parse, or parses outside the allowed range,
//! becomes the caller-supplied default instead of an error. The record's
//! own setters take exact-width integers, so these helpers are where loose
//! operator input gets tamed.

use std::fmt::Display;
use std::str::FromStr;

/// Parse `s` as a number in `min..=max`, or return `default`.
pub fn parse_number_or<T>(s: &str, min: T, max: T, default: T) -> T
where
    T: FromStr + PartialOrd + Copy + Display,
{
    let trimmed = s.trim();
    match trimmed.parse::<T>() {
        Ok(value) if value >= min && value <= max => value,
        Ok(value) => {
            log::debug!("input {value} outside {min}..={max}, using {default}");
            default
        }
        Err(_) => {
            log::debug!("unparseable numeric input {trimmed:?}, using {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_input_is_used() {
        assert_eq!(parse_number_or(" 42 ", 0u8, 255, 7), 42);
        assert_eq!(parse_number_or("500", 0u16, 65535, 0), 500);
    }

    #[test]
    fn garbage_degrades_to_default() {
        assert_eq!(parse_number_or("", 0u8, 255, 7), 7);
        assert_eq!(parse_number_or("abc", 0u16, 100, 25), 25);
        assert_eq!(parse_number_or("-1", 0u32, 100, 3), 3);
    }

    #[test]
    fn out_of_range_degrades_to_default() {
        assert_eq!(parse_number_or("300", 0u16, 255, 80), 80);
        assert_eq!(parse_number_or("1", 2u8, 9, 5), 5);
    }
}
