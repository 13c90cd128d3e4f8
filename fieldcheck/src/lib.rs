//! Declarative form-field validation.
//!
//! A [`RuleSet`] maps field names to [`ValidationRule`]s, usually drawn from
//! the fixed [`FieldKind`] catalog. A [`Validator`] owns one rule set plus
//! the current values and error messages for a form instance: `set_value`
//! validates a field as it is edited, `validate_all` checks a submitted
//! snapshot in one pass.
//!
//! # Example
//!
//! ```
//! use fieldcheck::{rule_set, FieldKind, Validator};
//!
//! let mut form = Validator::new(rule_set(&[FieldKind::Username, FieldKind::Password]));
//!
//! form.set_value("username", "ferris");
//! form.set_value("password", "ferris");
//!
//! assert_eq!(form.error("password"), Some("Password should not be same as username"));
//! ```

mod registry;
mod rules;
mod validator;

pub use registry::{rule_set, FieldKind, CONFIRM_PASSWORD, PASSWORD_NOT_USERNAME};
pub use rules::{CrossCheck, RuleSet, ValidationRule};
pub use validator::Validator;
