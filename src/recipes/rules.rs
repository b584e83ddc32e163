use lazy_static::lazy_static;
use regex::Regex;

use crate::validation::{validate, Rule, Ruleset, ValidationErrors};

use super::dto::RecipePayload;

lazy_static! {
    static ref RULES: Ruleset = Ruleset::new(vec![
        ("name", vec![Rule::Required, Rule::MaxLen(80)]),
        ("shortDescr", vec![Rule::Required, Rule::MaxLen(256)]),
        (
            "time",
            vec![Rule::Pattern(
                Regex::new(r"^[0-9]+$").unwrap(),
                "must be a number of minutes",
            )],
        ),
        ("imageUrl", vec![Rule::IsUrl]),
        ("longDescr", vec![Rule::MaxLen(2048)]),
    ]);
}

pub fn validate_payload(payload: &RecipePayload) -> Result<(), ValidationErrors> {
    validate(
        "recipe",
        &RULES,
        &[
            ("name", payload.name.as_deref()),
            ("shortDescr", payload.short_descr.as_deref()),
            ("time", payload.time.as_deref()),
            ("imageUrl", payload.image_url.as_deref()),
            ("longDescr", payload.long_descr.as_deref()),
        ],
    )
}
