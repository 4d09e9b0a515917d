//! Client-side form checks run before anything reaches the gateway.
//!
//! ERROR HANDLING
//! ==============
//! Each form returns the first failing rule as a [`ValidationError`]; its
//! `Display` text is shown inline under the form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use catalog::{ArtifactInput, LoginRequest, ProfileUpdate, RegisterRequest, User};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in all fields")]
    MissingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("nothing to update")]
    Unchanged,
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// # Errors
///
/// [`ValidationError::MissingFields`] when email or password is blank.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, ValidationError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(LoginRequest { email: email.to_owned(), password: form.password.clone() })
}

/// Rules apply in order: all fields present, confirmation matches, then
/// minimum length.
///
/// # Errors
///
/// The first rule that fails.
pub fn validate_register(form: &RegisterForm) -> Result<RegisterRequest, ValidationError> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() || form.confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: form.password.clone() })
}

/// Raw profile edit input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self { username: user.username.clone(), email: user.email.clone() }
    }
}

/// Only fields that differ from `current` are sent.
///
/// # Errors
///
/// [`ValidationError::MissingFields`] when either field is blank,
/// [`ValidationError::Unchanged`] when both match `current`.
pub fn validate_profile(form: &ProfileForm, current: &User) -> Result<ProfileUpdate, ValidationError> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let update = ProfileUpdate {
        username: (username != current.username).then(|| username.to_owned()),
        email: (email != current.email).then(|| email.to_owned()),
    };
    if update == ProfileUpdate::default() {
        return Err(ValidationError::Unchanged);
    }
    Ok(update)
}

/// Admin form: title, image path and category must be set.
///
/// # Errors
///
/// [`ValidationError::MissingField`] naming the first blank field.
pub fn validate_artifact_input(input: &ArtifactInput) -> Result<(), ValidationError> {
    let required = [("title", &input.title), ("image path", &input.image_path), ("category", &input.category)];
    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(ValidationError::MissingField(*name)),
        None => Ok(()),
    }
}
