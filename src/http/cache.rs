//! HTTP cache validation module
//!
//! `Last-Modified` formatting and `If-Modified-Since` evaluation. Dates
//! compare at whole-second precision, the resolution of HTTP dates.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::SystemTime;

const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";
const RFC850_DATE: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME_DATE: &str = "%a %b %e %H:%M:%S %Y";

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(IMF_FIXDATE).to_string()
}

/// Parse any of the three HTTP date formats
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    [IMF_FIXDATE, RFC850_DATE, ASCTIME_DATE]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// True when the client's copy is current and a 304 should be sent
///
/// A missing or unparsable header never matches.
pub fn is_not_modified(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    // Sun, 06 Nov 1994 08:49:37 GMT
    fn rfc_example() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(784_111_777)
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(rfc_example()), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_parse_all_formats() {
        let expected = DateTime::<Utc>::from(rfc_example());
        assert_eq!(parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT"), Some(expected));
        assert_eq!(parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT"), Some(expected));
        assert_eq!(parse_http_date("yesterday"), None);
    }

    #[test]
    fn test_not_modified() {
        let mtime = rfc_example() + Duration::from_millis(400);
        assert!(is_not_modified(Some("Sun, 06 Nov 1994 08:49:37 GMT"), mtime));
        assert!(is_not_modified(Some("Mon, 07 Nov 1994 00:00:00 GMT"), mtime));
        assert!(!is_not_modified(Some("Sun, 06 Nov 1994 08:49:36 GMT"), mtime));
        assert!(!is_not_modified(Some("garbage"), mtime));
        assert!(!is_not_modified(None, mtime));
    }
}
