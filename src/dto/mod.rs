pub mod admin;
pub mod auth;
pub mod invite;
pub mod registry;
pub mod wishlist;

/// HTML forms submit untouched optional inputs as empty strings.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required(value: &str, field: &str) -> crate::error::AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(crate::error::AppError::BadRequest(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Parses an `<input type="date">` value; blank means unset.
pub fn parse_date(value: Option<String>) -> crate::error::AppResult<Option<chrono::NaiveDate>> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| crate::error::AppError::BadRequest(format!("Invalid date {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_fields_read_as_missing() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(Some(" Jan ".into())), Some("Jan".into()));
        assert!(required("   ", "email").is_err());
        assert_eq!(parse_date(Some(String::new())).unwrap(), None);
        assert_eq!(
            parse_date(Some("2026-07-20".into())).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2026, 7, 20)
        );
        assert!(parse_date(Some("20-07-2026".into())).is_err());
    }
}
