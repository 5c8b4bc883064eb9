//! Individual field rules. Each check returns the user-facing message on failure.

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const VALUE_MIN: f64 = 0.0;
pub const VALUE_MAX: f64 = 1_000_000.0;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub(crate) const CATEGORY_MESSAGE: &str = "Please select a valid category";
pub(crate) const STATUS_MESSAGE: &str = "Please select a valid status";

pub(crate) fn check_name(name: &str) -> Option<&'static str> {
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        Some("Name must be at least 3 characters")
    } else if len > NAME_MAX_CHARS {
        Some("Name must be less than 100 characters")
    } else {
        None
    }
}

pub(crate) fn check_value(value: f64) -> Option<&'static str> {
    // NaN is outside every range, so test the accepted range first.
    if (VALUE_MIN..=VALUE_MAX).contains(&value) {
        None
    } else if value > VALUE_MAX {
        Some("Value must be less than 1,000,000")
    } else {
        Some("Value must be greater than or equal to 0")
    }
}

pub(crate) fn check_description(text: &str) -> Option<&'static str> {
    let len = text.chars().count();
    if len < DESCRIPTION_MIN_CHARS {
        Some("Description must be at least 10 characters")
    } else if len > DESCRIPTION_MAX_CHARS {
        Some("Description must be less than 500 characters")
    } else {
        None
    }
}

/// An empty textarea submits as "no description".
pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}
