use lazy_static::lazy_static;
use regex::Regex;

use crate::ident::OBJECT_ID_PATTERN;
use crate::validation::{validate, Rule, Ruleset, ValidationErrors};

use super::dto::{CreateUser, UpdateUser};

const SEXES: &[&str] = &["m", "f"];
const ROLES: &[&str] = &["admin", "user"];
const ACCOUNT_STATUSES: &[&str] = &["active", "suspended", "deactivated"];

fn base_rules() -> Vec<(&'static str, Vec<Rule>)> {
    vec![
        ("name", vec![Rule::Required]),
        (
            "username",
            vec![Rule::Required, Rule::MinLen(2), Rule::MaxLen(15)],
        ),
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
        ("sex", vec![Rule::Required, Rule::OneOf(SEXES)]),
        ("role", vec![Rule::OneOf(ROLES)]),
        ("imageUrl", vec![Rule::IsUrl]),
        ("description", vec![Rule::MaxLen(512)]),
        ("statusOfAcc", vec![Rule::OneOf(ACCOUNT_STATUSES)]),
    ]
}

lazy_static! {
    static ref CREATE: Ruleset = Ruleset::new(base_rules());
    static ref UPDATE: Ruleset = {
        let mut fields = vec![(
            "id",
            vec![
                Rule::Required,
                Rule::Pattern(
                    Regex::new(OBJECT_ID_PATTERN).unwrap(),
                    "must be 24 hexadecimal characters",
                ),
            ],
        )];
        fields.extend(base_rules());
        Ruleset::new(fields)
    };
}

pub fn validate_create(payload: &CreateUser) -> Result<(), ValidationErrors> {
    validate(
        "user",
        &CREATE,
        &[
            ("name", payload.name.as_deref()),
            ("username", payload.username.as_deref()),
            ("password", payload.password.as_deref()),
            ("sex", payload.sex.as_deref()),
            ("role", payload.role.as_deref()),
            ("imageUrl", payload.image_url.as_deref()),
            ("description", payload.description.as_deref()),
            ("statusOfAcc", payload.status_of_acc.as_deref()),
        ],
    )
}

pub fn validate_update(payload: &UpdateUser) -> Result<(), ValidationErrors> {
    validate(
        "user",
        &UPDATE,
        &[
            ("id", payload.id.as_deref()),
            ("name", payload.name.as_deref()),
            ("username", payload.username.as_deref()),
            ("password", payload.password.as_deref()),
            ("sex", payload.sex.as_deref()),
            ("role", payload.role.as_deref()),
            ("imageUrl", payload.image_url.as_deref()),
            ("description", payload.description.as_deref()),
            ("statusOfAcc", payload.status_of_acc.as_deref()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_create() -> CreateUser {
        CreateUser {
            name: Some("Maria Petrova".into()),
            username: Some("maria".into()),
            password: None,
            sex: Some("f".into()),
            role: None,
            image_url: None,
            description: None,
            status_of_acc: None,
        }
    }

    #[test]
    fn minimal_payload_is_valid() {
        assert!(validate_create(&minimal_create()).is_ok());
    }

    #[test]
    fn missing_name_sex_and_username_are_reported_together() {
        let payload = CreateUser {
            name: None,
            username: None,
            sex: None,
            ..minimal_create()
        };
        let errors = validate_create(&payload).unwrap_err();
        let fields: Vec<_> = errors.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "username", "sex"]);
    }

    #[test]
    fn sex_must_be_m_or_f() {
        let payload = CreateUser {
            sex: Some("female".into()),
            ..minimal_create()
        };
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(errors.violations()[0].field, "sex");
    }

    #[test]
    fn username_is_length_bounded() {
        let payload = CreateUser {
            username: Some("m".into()),
            ..minimal_create()
        };
        assert!(validate_create(&payload).is_err());

        let payload = CreateUser {
            username: Some("a-very-long-username".into()),
            ..minimal_create()
        };
        assert!(validate_create(&payload).is_err());
    }

    #[test]
    fn weak_password_is_rejected() {
        let payload = CreateUser {
            password: Some("onlyletters".into()),
            ..minimal_create()
        };
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(errors.violations()[0].field, "password");
        assert!(validate_create(&CreateUser {
            password: Some("s3cret".into()),
            ..minimal_create()
        })
        .is_ok());
    }

    #[test]
    fn role_and_status_are_enumerated() {
        let payload = CreateUser {
            role: Some("superuser".into()),
            status_of_acc: Some("frozen".into()),
            ..minimal_create()
        };
        let errors = validate_create(&payload).unwrap_err();
        let fields: Vec<_> = errors.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["role", "statusOfAcc"]);
    }

    #[test]
    fn update_requires_a_well_formed_id() {
        let payload = UpdateUser {
            id: None,
            name: Some("Maria Petrova".into()),
            username: Some("maria".into()),
            password: None,
            sex: Some("f".into()),
            role: None,
            image_url: None,
            description: None,
            status_of_acc: None,
        };
        let errors = validate_update(&payload).unwrap_err();
        assert_eq!(errors.violations()[0].field, "id");

        let payload = UpdateUser {
            id: Some("not-hex".into()),
            ..payload
        };
        let errors = validate_update(&payload).unwrap_err();
        assert_eq!(
            errors.violations()[0].message,
            "id must be 24 hexadecimal characters"
        );

        let payload = UpdateUser {
            id: Some("507f1f77bcf86cd799439011".into()),
            ..payload
        };
        assert!(validate_update(&payload).is_ok());
    }
}
