//! Input validation utilities

use std::sync::OnceLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone regex is valid"))
}

/// Basic email shape check (local@domain.tld)
pub fn email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Basic phone number check, ignoring spaces, hyphens, and parentheses
pub fn phone(value: &str) -> bool {
    let digits: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    phone_regex().is_match(&digits)
}

/// URL shape check: a scheme, "://", and a non-empty remainder
pub fn url(value: &str) -> bool {
    match value.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
                && !rest.is_empty()
        }
        None => false,
    }
}

/// Non-empty after trimming
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn number_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Password strength assessment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    /// All checks passed
    pub is_valid: bool,
    /// Number of checks passed (0-5)
    pub score: u8,
    /// What is still missing
    pub feedback: Vec<String>,
}

/// Score a password against length and character-class checks
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0u8;
    let mut feedback = vec![];

    let checks: [(bool, &str); 5] = [
        (
            password.len() >= 8,
            "Password should be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password should contain lowercase letters",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password should contain uppercase letters",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password should contain numbers",
        ),
        (
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "Password should contain special characters",
        ),
    ];

    for (passed, message) in checks {
        if passed {
            score += 1;
        } else {
            feedback.push(message.to_string());
        }
    }

    PasswordStrength {
        is_valid: feedback.is_empty(),
        score,
        feedback,
    }
}
