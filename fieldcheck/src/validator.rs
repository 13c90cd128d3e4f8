//! Stateful validation engine for one form instance.

use std::collections::HashMap;

use crate::rules::RuleSet;

/// Tracks current values and error messages for one form.
///
/// The rule set is fixed at construction; values and errors start empty and
/// are mutated by [`set_value`](Self::set_value) and
/// [`validate_all`](Self::validate_all). An empty string in the error map
/// means the field was validated and passed.
#[derive(Debug)]
pub struct Validator {
    rules: RuleSet,
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl Validator {
    /// Create a validator over a fixed rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            values: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    /// The rule set this validator enforces.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate one candidate value, reading `siblings` for cross-field
    /// checks. Returns the error message, or `None` when the value passes.
    ///
    /// Checks run in a fixed order and stop at the first failure: required,
    /// pattern (skipped for empty values), minimum length, maximum length,
    /// cross-field check. Fields without a rule are treated as valid.
    pub fn validate_field(
        &self,
        name: &str,
        value: &str,
        siblings: &HashMap<String, String>,
    ) -> Option<String> {
        let rule = self.rules.get(name)?;

        if rule.required && value.trim().is_empty() {
            return Some(format!("{} is required", name));
        }

        if let Some(pattern) = &rule.pattern {
            if !value.is_empty() && !pattern.is_match(value) {
                return Some(pattern_message(name));
            }
        }

        if let Some(min) = rule.min_length {
            if value.chars().count() < min {
                return Some(format!("{} must be at least {} characters", name, min));
            }
        }

        if let Some(max) = rule.max_length {
            if value.chars().count() > max {
                return Some(format!("{} must not exceed {} characters", name, max));
            }
        }

        if let Some(check) = &rule.check {
            let sibling = siblings.get(check.sibling()).map(String::as_str);
            if let Err(message) = check.evaluate(value, sibling) {
                return Some(message.to_string());
            }
        }

        None
    }

    /// Store a field's value and refresh its error entry.
    ///
    /// The field is validated against the value map as updated by this call,
    /// so a cross-field check sees the new value when it reads its own field.
    /// Values of untracked fields are stored but never produce error entries.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.values.insert(name.to_string(), value.clone());

        if !self.rules.contains(name) {
            return;
        }

        let error = self.validate_field(name, &value, &self.values);
        self.errors.insert(name.to_string(), error.unwrap_or_default());
    }

    /// Validate a submitted snapshot of values in one pass.
    ///
    /// Every field in the rule set is checked against the snapshot (missing
    /// entries read as empty); stored values play no part. The stored errors
    /// are replaced by a fresh map holding one message per failing field.
    /// Returns `true` when every field passed.
    pub fn validate_all(&mut self, snapshot: &HashMap<String, String>) -> bool {
        let mut errors = HashMap::new();

        for name in self.rules.names() {
            let value = snapshot.get(name).map(String::as_str).unwrap_or("");
            if let Some(message) = self.validate_field(name, value, snapshot) {
                errors.insert(name.to_string(), message);
            }
        }

        let valid = errors.is_empty();
        if !valid {
            log::debug!("validation failed for {} field(s)", errors.len());
        }
        self.errors = errors;
        valid
    }

    /// Current value of a field, empty when never set.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// All stored values.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Current error for a field. Empty entries read as no error.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// All stored error entries, including empty ones for fields that passed.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }
}

/// Message for a pattern failure, chosen by case-insensitive field name.
fn pattern_message(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "name" => "Name should contain only alphabets".to_string(),
        "username" => {
            "Username can contain alphanumeric characters and special symbols".to_string()
        }
        "email" => "Please enter a valid email address".to_string(),
        "phone" => "Please enter a valid phone number with country code".to_string(),
        "password" => {
            "Password can contain alphanumeric characters and special symbols".to_string()
        }
        _ => format!("Invalid {} format", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ValidationRule;

    #[test]
    fn test_pattern_message_lookup_ignores_case() {
        assert_eq!(pattern_message("EMAIL"), "Please enter a valid email address");
        assert_eq!(pattern_message("Phone"), "Please enter a valid phone number with country code");
    }

    #[test]
    fn test_pattern_message_falls_back_to_generic() {
        assert_eq!(pattern_message("nickname"), "Invalid nickname format");
    }

    #[test]
    fn test_untracked_field_is_valid() {
        let form = Validator::new(RuleSet::new());
        assert_eq!(form.validate_field("ghost", "", &HashMap::new()), None);
    }

    #[test]
    fn test_untracked_set_value_stores_value_without_error_entry() {
        let mut form = Validator::new(RuleSet::new().with("a", ValidationRule::new().required()));

        form.set_value("ghost", "boo");

        assert_eq!(form.value("ghost"), "boo");
        assert!(!form.errors().contains_key("ghost"));
        assert_eq!(form.error("ghost"), None);
    }
}
