use super::*;

fn register(username: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_both_fields() {
    let form = LoginForm { email: "  ".to_owned(), password: "secret1".to_owned() };
    assert_eq!(validate_login(&form), Err(ValidationError::MissingFields));

    let form = LoginForm { email: "a@b.com".to_owned(), password: String::new() };
    assert_eq!(validate_login(&form), Err(ValidationError::MissingFields));
}

#[test]
fn login_trims_email() {
    let form = LoginForm { email: " a@b.com ".to_owned(), password: "x".to_owned() };
    let request = validate_login(&form).expect("valid");
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, "x");
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_missing_fields_checked_first() {
    let form = register("", "a@b.com", "abc", "xyz");
    assert_eq!(validate_register(&form), Err(ValidationError::MissingFields));
}

#[test]
fn register_mismatch_checked_before_length() {
    let form = register("li", "a@b.com", "abc", "abd");
    assert_eq!(validate_register(&form), Err(ValidationError::PasswordMismatch));
}

#[test]
fn register_rejects_short_password() {
    let form = register("li", "a@b.com", "abc12", "abc12");
    assert_eq!(validate_register(&form), Err(ValidationError::PasswordTooShort));
    assert_eq!(
        ValidationError::PasswordTooShort.to_string(),
        "password must be at least 6 characters"
    );
}

#[test]
fn register_accepts_six_characters() {
    let form = register("li", "a@b.com", "abc123", "abc123");
    let request = validate_register(&form).expect("valid");
    assert_eq!(request.username, "li");
}

// =============================================================
// Artifact form
// =============================================================

#[test]
fn artifact_input_names_first_missing_field() {
    let mut input = ArtifactInput::default();
    assert_eq!(validate_artifact_input(&input), Err(ValidationError::MissingField("title")));

    input.title = "Ding".to_owned();
    input.image_path = "ding.jpg".to_owned();
    assert_eq!(validate_artifact_input(&input), Err(ValidationError::MissingField("category")));

    input.category = "bronze".to_owned();
    assert_eq!(validate_artifact_input(&input), Ok(()));
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_sends_only_changed_fields() {
    let current = crate::test_support::user("yi@example.com");
    let form = ProfileForm { username: " yue ".to_owned(), email: "yi@example.com".to_owned() };
    let update = validate_profile(&form, &current).expect("changed");
    assert_eq!(update, ProfileUpdate { username: Some("yue".to_owned()), email: None });
}

#[test]
fn profile_without_changes_is_rejected() {
    let current = crate::test_support::user("yi@example.com");
    let form = ProfileForm::from_user(&current);
    assert_eq!(validate_profile(&form, &current), Err(ValidationError::Unchanged));
}

#[test]
fn profile_fields_cannot_be_blanked() {
    let current = crate::test_support::user("yi@example.com");
    let form = ProfileForm { username: "yi".to_owned(), email: "  ".to_owned() };
    assert_eq!(validate_profile(&form, &current), Err(ValidationError::MissingFields));
}
