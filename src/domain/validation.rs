//! Pure validation predicates for request fields.
//!
//! These never fail and never touch storage. Handlers and services call them
//! before persisting anything and surface a 400 when they return `false`.

/// Maximum length of an entry's drink label (`VARCHAR(50)`).
pub const MAX_ENTRY_TYPE_LEN: usize = 50;
/// Maximum username length (`VARCHAR(50)`).
pub const MAX_USERNAME_LEN: usize = 50;
/// Maximum email length (`VARCHAR(100)`).
pub const MAX_EMAIL_LEN: usize = 100;
/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Returns `true` iff `amount > 0` and `kind` is non-empty.
#[must_use]
pub fn validate_entry(amount: i32, kind: &str) -> bool {
    amount > 0 && !kind.is_empty()
}

/// Returns `true` iff `goal >= 1`.
#[must_use]
pub const fn validate_goal(goal: i32) -> bool {
    goal >= 1
}

/// Username must be non-blank and at most [`MAX_USERNAME_LEN`] characters.
#[must_use]
pub fn validate_username(username: &str) -> bool {
    !username.trim().is_empty() && username.chars().count() <= MAX_USERNAME_LEN
}

/// Password must have at least [`MIN_PASSWORD_LEN`] characters.
#[must_use]
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Checks for a `local@domain.tld` shape.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain
/// containing a dot that is neither its first nor its last character.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len() && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_validation() {
        assert!(validate_entry(200, "water"));
        assert!(!validate_entry(0, "water"));
        assert!(!validate_entry(-10, "water"));
        assert!(!validate_entry(100, ""));
        assert!(validate_entry(1, "t"));
    }

    #[test]
    fn goal_validation() {
        assert!(validate_goal(1));
        assert!(validate_goal(2000));
        assert!(!validate_goal(0));
        assert!(!validate_goal(-1));
    }

    #[test]
    fn username_validation() {
        assert!(validate_username("john_doe"));
        assert!(!validate_username(""));
        assert!(!validate_username("   "));
        assert!(!validate_username(&"a".repeat(MAX_USERNAME_LEN + 1)));
    }

    #[test]
    fn password_validation() {
        assert!(validate_password("secret"));
        assert!(!validate_password("12345"));
        assert!(!validate_password(""));
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("john@example.com"));
        assert!(validate_email("a.b+tag@mail.example.org"));
        assert!(!validate_email("invalid-email"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("john@localhost"));
        assert!(!validate_email("john@example."));
        assert!(!validate_email("john@.com"));
        assert!(!validate_email("jo hn@example.com"));
        assert!(!validate_email("a@b@example.com"));
    }
}
