use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

/// Short date the board shows (`ru-RU` style).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format a `created_at` value as a short date in `offset`.
///
/// Accepts RFC 3339 strings, naive ISO date-times and dates (read as wall
/// time in `offset`), and epoch milliseconds. Anything else yields `None`.
pub fn format_timestamp(value: &Value, offset: FixedOffset) -> Option<String> {
    let instant = match value {
        Value::String(s) => parse_timestamp(s.trim(), offset)?,
        Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?)?.fixed_offset(),
        _ => return None,
    };

    Some(instant.with_timezone(&offset).format(DATE_FORMAT).to_string())
}

fn parse_timestamp(s: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    offset.from_local_datetime(&naive).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msk() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn rfc3339_in_display_offset() {
        let v = json!("2024-01-05T00:00:00Z");
        assert_eq!(format_timestamp(&v, msk()).as_deref(), Some("05.01.2024"));

        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_timestamp(&v, west).as_deref(), Some("04.01.2024"));
    }

    #[test]
    fn go_style_nanosecond_timestamp() {
        let v = json!("2025-03-14T21:30:00.123456789+03:00");
        assert_eq!(format_timestamp(&v, msk()).as_deref(), Some("14.03.2025"));
    }

    #[test]
    fn naive_forms_are_wall_time() {
        assert_eq!(
            format_timestamp(&json!("2024-02-29T23:59:59"), msk()).as_deref(),
            Some("29.02.2024")
        );
        assert_eq!(
            format_timestamp(&json!("2024-02-29"), msk()).as_deref(),
            Some("29.02.2024")
        );
    }

    #[test]
    fn epoch_millis() {
        // 2024-01-05T00:00:00Z
        let v = json!(1_704_412_800_000_i64);
        assert_eq!(format_timestamp(&v, msk()).as_deref(), Some("05.01.2024"));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(format_timestamp(&json!("вчера"), msk()), None);
        assert_eq!(format_timestamp(&json!(true), msk()), None);
    }
}
