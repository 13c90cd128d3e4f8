//! Rule model: per-field constraint records and the ordered rule set.

use regex::Regex;

/// Cross-field check comparing a value against one named sibling field.
///
/// Checks form a closed set so a rule stays plain data: each variant names
/// the sibling it reads and carries its own failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossCheck {
    /// Fails when the value equals the sibling's value.
    NotEqualTo {
        field: &'static str,
        message: &'static str,
    },
    /// Fails when the value differs from the sibling's value.
    EqualTo {
        field: &'static str,
        message: &'static str,
    },
}

impl CrossCheck {
    /// Name of the sibling field this check reads.
    pub fn sibling(&self) -> &'static str {
        match *self {
            Self::NotEqualTo { field, .. } | Self::EqualTo { field, .. } => field,
        }
    }

    /// Evaluate the check against a candidate value and the sibling's value.
    ///
    /// A missing or empty sibling passes; the sibling's own rules report on
    /// it instead.
    pub fn evaluate(&self, value: &str, sibling: Option<&str>) -> Result<(), &'static str> {
        let sibling = match sibling {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(()),
        };

        match *self {
            Self::NotEqualTo { message, .. } if value == sibling => Err(message),
            Self::EqualTo { message, .. } if value != sibling => Err(message),
            _ => Ok(()),
        }
    }
}

/// Declarative constraints for a single field.
///
/// Fields default to unconstrained; constraints are switched on through the
/// builder methods.
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub pattern: Option<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub check: Option<CrossCheck>,
}

impl ValidationRule {
    /// Create an unconstrained rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty value (after trimming whitespace).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Require non-empty values to match a pattern. Matching is a search,
    /// so anchor with `^` and `$` to constrain the whole value.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Require a minimum length, counted in characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require a maximum length, counted in characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Attach a cross-field check.
    pub fn check(mut self, check: CrossCheck) -> Self {
        self.check = Some(check);
        self
    }
}

/// Ordered mapping from field name to its rule.
///
/// Built once per form and never mutated afterwards. Iteration follows
/// insertion order, which fixes the order whole-form validation visits
/// fields in.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(String, ValidationRule)>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field's rule. Re-adding a name replaces the rule in place,
    /// keeping the field's original position.
    pub fn add(&mut self, name: impl Into<String>, rule: ValidationRule) {
        let name = name.into();
        if let Some(entry) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = rule;
        } else {
            self.fields.push((name, rule));
        }
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.add(name, rule);
        self
    }

    /// Look up the rule for a field.
    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    /// Whether a field is tracked by this rule set.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Iterate fields and rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.fields.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Iterate field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Number of tracked fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the rule set tracks no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
