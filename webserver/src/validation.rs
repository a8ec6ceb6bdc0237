//! Registration input checks

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{FieldError, RegisterRequest};

pub const USERNAME_MIN: usize = 5;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 5;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Every problem with a registration request, in field order
pub fn validate_registration(request: &RegisterRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let username_len = request.username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_len) {
        errors.push(FieldError::for_param(
            "Usernames must be between 5 and 30 characters",
            "username",
        ));
    }

    if !is_valid_email(&request.email) {
        errors.push(FieldError::for_param("Please include a valid email", "email"));
    }

    if request.password.chars().count() < PASSWORD_MIN {
        errors.push(FieldError::for_param(
            "Password must be at least 5 characters long",
            "password",
        ));
    }

    errors
}
