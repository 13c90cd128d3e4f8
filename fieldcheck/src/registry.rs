//! Fixed field catalog: compiled patterns, per-field rules, named checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::{CrossCheck, RuleSet, ValidationRule};

/// Letters and whitespace only.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid regex pattern"));

/// Letters, digits, and a fixed set of punctuation and symbols. No whitespace.
/// Shared by usernames and passwords.
static CREDENTIAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z0-9!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]+$"#)
        .expect("Invalid regex pattern")
});

/// `local@domain.tld` shape: one `@`, dotted domain, TLD of two or more letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex pattern")
});

/// E.164-like: `+`, a non-zero leading digit, then 1 to 14 more digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("Invalid regex pattern"));

/// Password must not repeat the username.
pub const PASSWORD_NOT_USERNAME: CrossCheck = CrossCheck::NotEqualTo {
    field: "username",
    message: "Password should not be same as username",
};

/// Confirmation must repeat the password.
pub const CONFIRM_PASSWORD: CrossCheck = CrossCheck::EqualTo {
    field: "password",
    message: "Passwords do not match",
};

/// The fields the catalog knows how to validate.
///
/// Forms pick a subset of these to build their [`RuleSet`]; the rule attached
/// to each kind is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    /// Every catalog entry, in catalog order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::Username,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
    ];

    /// Field name used in rule sets, value maps, and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// The catalog rule for this field.
    pub fn rule(self) -> ValidationRule {
        match self {
            Self::Name => ValidationRule::new().required().pattern(NAME_PATTERN.clone()),
            Self::Username => ValidationRule::new()
                .required()
                .pattern(CREDENTIAL_PATTERN.clone()),
            Self::Email => ValidationRule::new().required().pattern(EMAIL_PATTERN.clone()),
            Self::Phone => ValidationRule::new().required().pattern(PHONE_PATTERN.clone()),
            Self::Password => ValidationRule::new()
                .required()
                .pattern(CREDENTIAL_PATTERN.clone())
                .min_length(6)
                .check(PASSWORD_NOT_USERNAME),
            Self::ConfirmPassword => ValidationRule::new().required().check(CONFIRM_PASSWORD),
        }
    }
}

/// Build a form's rule set from catalog entries, in the given order.
pub fn rule_set(kinds: &[FieldKind]) -> RuleSet {
    let mut rules = RuleSet::new();
    for kind in kinds {
        rules.add(kind.name(), kind.rule());
    }
    rules
}
