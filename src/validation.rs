use std::fmt;

use regex::Regex;
use serde::Serialize;
use url::Url;

/// A single constraint on one field. Rules other than `Required` pass
/// vacuously when the field is absent.
#[derive(Debug)]
pub enum Rule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Pattern(Regex, &'static str),
    OneOf(&'static [&'static str]),
    IsUrl,
}

impl Rule {
    fn check(&self, field: &'static str, value: Option<&str>) -> Result<(), String> {
        let Some(value) = value else {
            return match self {
                Rule::Required => Err(format!("{field} is required")),
                _ => Ok(()),
            };
        };
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    Err(format!("{field} is required"))
                } else {
                    Ok(())
                }
            }
            Rule::MinLen(n) => {
                if value.chars().count() < *n {
                    Err(format!("{field} must be at least {n} characters"))
                } else {
                    Ok(())
                }
            }
            Rule::MaxLen(n) => {
                if value.chars().count() > *n {
                    Err(format!("{field} must be at most {n} characters"))
                } else {
                    Ok(())
                }
            }
            Rule::Pattern(re, description) => {
                if re.is_match(value) {
                    Ok(())
                } else {
                    Err(format!("{field} {description}"))
                }
            }
            Rule::OneOf(allowed) => {
                if allowed.contains(&value) {
                    Ok(())
                } else {
                    Err(format!("{field} must be one of: {}", allowed.join(", ")))
                }
            }
            Rule::IsUrl => {
                if Url::parse(value).is_ok() {
                    Ok(())
                } else {
                    Err(format!("{field} must be a valid URL"))
                }
            }
        }
    }
}

/// Field-name-to-rules mapping for one operation.
pub struct Ruleset {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Ruleset {
    pub fn new(fields: Vec<(&'static str, Vec<Rule>)>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors {
    subject: &'static str,
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: ", self.subject)?;
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Evaluates `ruleset` against the extracted field values. Stops at the
/// first violated rule per field but keeps collecting across fields, so
/// the failure reports every offending field at once.
pub fn validate(
    subject: &'static str,
    ruleset: &Ruleset,
    values: &[(&'static str, Option<&str>)],
) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();
    for (field, rules) in &ruleset.fields {
        let field = *field;
        let value = values
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, value)| *value);
        for rule in rules {
            if let Err(message) = rule.check(field, value) {
                violations.push(Violation { field, message });
                break;
            }
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors {
            subject,
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset() -> Ruleset {
        Ruleset::new(vec![
            ("name", vec![Rule::Required]),
            (
                "username",
                vec![Rule::Required, Rule::MinLen(2), Rule::MaxLen(15)],
            ),
            ("role", vec![Rule::OneOf(&["admin", "user"])]),
            ("imageUrl", vec![Rule::IsUrl]),
            (
                "password",
                vec![
                    Rule::Pattern(Regex::new("[A-Za-z]").unwrap(), "must contain a letter"),
                    Rule::Pattern(
                        Regex::new(r"[0-9@$!%*#?&]").unwrap(),
                        "must contain a digit or symbol",
                    ),
                ],
            ),
        ])
    }

    #[test]
    fn valid_values_pass() {
        let result = validate(
            "user",
            &ruleset(),
            &[
                ("name", Some("Maria")),
                ("username", Some("maria")),
                ("role", Some("admin")),
                ("imageUrl", Some("https://example.com/a.jpg")),
                ("password", Some("secret1")),
            ],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let result = validate(
            "user",
            &ruleset(),
            &[("name", Some("Maria")), ("username", Some("maria"))],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        let errors = validate("user", &ruleset(), &[("username", Some("maria"))]).unwrap_err();
        assert_eq!(errors.violations().len(), 1);
        assert_eq!(errors.violations()[0].field, "name");

        let errors = validate(
            "user",
            &ruleset(),
            &[("name", Some("   ")), ("username", Some("maria"))],
        )
        .unwrap_err();
        assert_eq!(errors.violations()[0].message, "name is required");
    }

    #[test]
    fn collects_across_fields_first_rule_per_field() {
        let errors = validate(
            "user",
            &ruleset(),
            &[
                ("name", None),
                ("username", Some("x")), // violates MinLen, never reaches MaxLen
                ("role", Some("root")),
            ],
        )
        .unwrap_err();
        let fields: Vec<_> = errors.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "username", "role"]);
        assert_eq!(
            errors.violations()[1].message,
            "username must be at least 2 characters"
        );
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let ok = validate("user", &ruleset(), &[
            ("name", Some("a")),
            ("username", Some("ab")),
        ]);
        assert!(ok.is_ok());
        let ok = validate("user", &ruleset(), &[
            ("name", Some("a")),
            ("username", Some("exactly15chars_")),
        ]);
        assert!(ok.is_ok());
        let err = validate("user", &ruleset(), &[
            ("name", Some("a")),
            ("username", Some("sixteen__chars__")),
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn url_rule_rejects_non_urls() {
        let errors = validate(
            "user",
            &ruleset(),
            &[
                ("name", Some("a")),
                ("username", Some("ab")),
                ("imageUrl", Some("not a url")),
            ],
        )
        .unwrap_err();
        assert_eq!(errors.violations()[0].message, "imageUrl must be a valid URL");
    }

    #[test]
    fn password_needs_letter_and_digit_or_symbol() {
        let base = [("name", Some("a")), ("username", Some("ab"))];

        let mut values = base.to_vec();
        values.push(("password", Some("12345678")));
        let errors = validate("user", &ruleset(), &values).unwrap_err();
        assert_eq!(errors.violations()[0].message, "password must contain a letter");

        let mut values = base.to_vec();
        values.push(("password", Some("letters")));
        let errors = validate("user", &ruleset(), &values).unwrap_err();
        assert_eq!(
            errors.violations()[0].message,
            "password must contain a digit or symbol"
        );

        let mut values = base.to_vec();
        values.push(("password", Some("letters@")));
        assert!(validate("user", &ruleset(), &values).is_ok());
    }

    #[test]
    fn display_names_the_subject_and_joins_messages() {
        let errors = validate("user", &ruleset(), &[("username", Some("x"))]).unwrap_err();
        let message = errors.to_string();
        assert!(message.starts_with("Invalid user: "));
        assert!(message.contains("name is required"));
        assert!(message.contains("; "));
    }
}
