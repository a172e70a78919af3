//! # String Formats
//!
//! The closed set of named string checks understood by the `format`
//! keyword. Each check applies to string instances only. Names outside the
//! set are kept as [`Format::Unknown`] and accept every string.
//!
//! The regular expressions are process-wide statics compiled on first use.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

/// `YYYY-MM-DD`, optional `THH:MM:SS(.frac)`, optional `Z` or `±HH:MM`.
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}([Tt][0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]+)?)?([Zz]|[+-][0-9]{2}:[0-9]{2})?$",
    )
    .expect("date-time pattern compiles")
});

/// Deliberately loose: something, an `@`, something.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+").expect("email pattern compiles"));

/// Dot-separated labels: letter start, alphanumeric or hyphen body, alphanumeric end.
static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]([-0-9a-zA-Z]*[0-9a-zA-Z])?(\.[a-zA-Z]([-0-9a-zA-Z]*[0-9a-zA-Z])?)*$")
        .expect("hostname pattern compiles")
});

const MAX_HOSTNAME_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// A named string format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339-style date with optional time and offset.
    DateTime,
    /// Request URI: an absolute URI with a scheme, or an absolute path.
    Uri,
    /// Loose email address: non-empty text on both sides of an `@`.
    Email,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// IPv6 address.
    Ipv6,
    /// DNS hostname.
    Hostname,
    /// Any other name; performs no validation.
    Unknown(String),
}

impl Format {
    /// Look up a format by its schema name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "date-time" => Self::DateTime,
            "uri" => Self::Uri,
            "email" => Self::Email,
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "hostname" => Self::Hostname,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The schema name of this format.
    pub fn name(&self) -> &str {
        match self {
            Self::DateTime => "date-time",
            Self::Uri => "uri",
            Self::Email => "email",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Hostname => "hostname",
            Self::Unknown(name) => name,
        }
    }

    /// Returns true for [`Format::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns true if `s` conforms to this format.
    pub fn is_valid(&self, s: &str) -> bool {
        match self {
            Self::DateTime => DATE_TIME.is_match(s),
            Self::Uri => is_absolute_path(s) || url::Url::parse(s).is_ok(),
            Self::Email => EMAIL.is_match(s),
            Self::Ipv4 => s.parse::<Ipv4Addr>().is_ok(),
            Self::Ipv6 => s.parse::<Ipv6Addr>().is_ok(),
            Self::Hostname => is_hostname(s),
            Self::Unknown(_) => true,
        }
    }

    /// Description reported when a string does not conform.
    pub(crate) fn violation(&self) -> String {
        match self {
            Self::DateTime => "Value must conform to RFC3339.".to_string(),
            Self::Uri => "Value must be a valid URI, according to RFC3986.".to_string(),
            Self::Email => "Value must be a valid email address.".to_string(),
            Self::Ipv4 => "Value must be a valid IPv4 address.".to_string(),
            Self::Ipv6 => "Value must be a valid IPv6 address.".to_string(),
            Self::Hostname => "Value must be a valid hostname.".to_string(),
            Self::Unknown(name) => format!("Value must conform to format {name:?}."),
        }
    }
}

/// An absolute path as a request target: leading `/`, no control
/// characters, and every `%` starting a two-digit hex escape.
fn is_absolute_path(s: &str) -> bool {
    if !s.starts_with('/') || s.chars().any(char::is_control) {
        return false;
    }
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

fn is_hostname(s: &str) -> bool {
    s.len() <= MAX_HOSTNAME_LEN
        && HOSTNAME.is_match(s)
        && s.split('.').all(|label| label.len() <= MAX_LABEL_LEN)
}
