//! Display Formatting
//!
//! Date labels, DOM ids and outbound links shared by the list pages and the
//! dashboard panels.

use chrono::{DateTime, Local, TimeZone, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const UNKNOWN_DATE: &str = "Unknown";

/// Short calendar date in the browser's zone, e.g. "Mar 1, 2024".
pub fn display_date(at: Option<DateTime<Utc>>) -> String {
    display_date_in(at, &Local)
}

pub fn display_date_in<Tz: TimeZone>(at: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match at {
        Some(t) => t.with_timezone(tz).format("%b %-d, %Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Date and time for admin rows.
pub fn display_datetime(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(t) => t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Element id of a post card, the scroll target of the recent-posts list.
pub fn post_dom_id(id: &str) -> String {
    format!("post-{}", id)
}

/// Mail compose window addressed to `email`.
pub fn reply_url(email: &str) -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&to={}",
        utf8_percent_encode(email.trim(), NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_display_date_in_zone() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T22:30:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(display_date_in(Some(at), &Utc), "Mar 1, 2024");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(display_date_in(Some(at), &tokyo), "Mar 2, 2024");
        assert_eq!(display_date_in(None, &Utc), "Unknown");
    }

    #[test]
    fn test_reply_url_encodes_address() {
        assert_eq!(
            reply_url(" ada+site@example.com "),
            "https://mail.google.com/mail/?view=cm&to=ada%2Bsite%40example%2Ecom"
        );
    }

    #[test]
    fn test_post_dom_id() {
        assert_eq!(post_dom_id("abc"), "post-abc");
    }
}
