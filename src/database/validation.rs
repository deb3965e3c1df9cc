//! Boundary checks applied before a row reaches the store.

use chrono::NaiveDate as Date;

use crate::error::{Result, SchemaError};

/// Length limit of ordinary text columns.
pub const MAX_TEXT_LEN: usize = 255;
pub const MAX_PHONE_LEN: usize = 20;

/// A required, non-blank value of at most `max_len` characters.
pub fn require_text(field: &'static str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchemaError::validation(field, "this field is required"));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(SchemaError::validation(
            field,
            format!("at most {max_len} characters allowed, got {len}"),
        ));
    }
    Ok(())
}

/// Free text: required, no length limit.
pub fn require_content(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchemaError::validation(field, "this field is required"));
    }
    Ok(())
}

/// A `local@domain.tld` address within the text length limit.
pub fn require_email(field: &'static str, value: &str) -> Result<()> {
    require_text(field, value, MAX_TEXT_LEN)?;
    if !is_email(value) {
        return Err(SchemaError::validation(field, "enter a valid email address"));
    }
    Ok(())
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels
            .iter()
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}

pub fn require_date_order(start: Date, end: Date) -> Result<()> {
    if start > end {
        return Err(SchemaError::validation(
            "end_date",
            format!("end date {end} is before start date {start}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("first_name", "   ", MAX_TEXT_LEN).is_err());
        assert!(require_text("first_name", "Anna", MAX_TEXT_LEN).is_ok());
        assert!(require_content("description", "\n").is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let cyrillic = "Ж".repeat(MAX_TEXT_LEN);
        assert!(require_text("faculty", &cyrillic, MAX_TEXT_LEN).is_ok());
        assert!(require_text("phone", "+7 (900) 000-00-00-00", MAX_PHONE_LEN).is_err());
    }

    #[test]
    fn email_shape() {
        for ok in ["a@b.ru", "first.last@uni.example.org", "x+tag@mail.co"] {
            assert!(require_email("email", ok).is_ok(), "{ok} rejected");
        }
        for bad in ["plain", "@nouser.ru", "user@", "user@localhost", "a b@c.ru", "a@-x.ru", "a@@b.ru"] {
            assert!(require_email("email", bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn dates_may_coincide_but_not_invert() {
        assert!(require_date_order(date(2024, 6, 1), date(2024, 6, 1)).is_ok());
        assert!(matches!(
            require_date_order(date(2024, 9, 1), date(2024, 6, 1)),
            Err(SchemaError::Validation { field: "end_date", .. })
        ));
    }
}
