use time::OffsetDateTime;

/// Bookkeeping timestamp in the legacy `D/M/YYYY H:M:S` form, components
/// not zero-padded. Stored documents already carry this format, so it is
/// preserved verbatim.
pub fn now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_legacy(now)
}

pub fn format_legacy(dt: OffsetDateTime) -> String {
    format!(
        "{}/{}/{} {}:{}:{}",
        dt.day(),
        u8::from(dt.month()),
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn components_are_not_zero_padded() {
        let stamp = format_legacy(datetime!(2024-03-05 9:07:02 UTC));
        assert_eq!(stamp, "5/3/2024 9:7:2");
    }

    #[test]
    fn double_digit_components_kept_as_is() {
        let stamp = format_legacy(datetime!(2023-12-31 23:59:58 UTC));
        assert_eq!(stamp, "31/12/2023 23:59:58");
    }

    #[test]
    fn now_matches_the_legacy_shape() {
        let stamp = now();
        let re = regex::Regex::new(r"^\d{1,2}/\d{1,2}/\d{4} \d{1,2}:\d{1,2}:\d{1,2}$").unwrap();
        assert!(re.is_match(&stamp), "unexpected stamp: {stamp}");
    }
}
