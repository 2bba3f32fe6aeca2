use crate::RecordType;
use fancy_regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Maximum length of an encoded name on the wire, root label included.
pub const MAX_WIRE_NAME_LEN: usize = 255;

static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?!-)[A-Za-z0-9-]{1,63}(?<!-)$").expect("label pattern is a valid regex")
});

/// Converts `hostname` to its IDNA ASCII-compatible form.
///
/// A single trailing dot is preserved. Returns `None` when the input cannot be
/// IDNA-encoded or is empty.
pub fn to_ascii_hostname(hostname: &str) -> Option<String> {
    let (body, fqdn) = match hostname.strip_suffix('.') {
        Some(body) => (body, true),
        None => (hostname, false),
    };
    if body.is_empty() {
        return None;
    }

    let mut ascii = idna::domain_to_ascii(body).ok()?;
    if fqdn {
        ascii.push('.');
    }
    Some(ascii)
}

/// Validates a hostname after IDNA normalization.
///
/// The absolute ACE form must encode to at most 255 octets and, with exactly
/// one trailing dot stripped, every label must be 1-63 letters, digits or
/// hyphens without a leading or trailing hyphen.
pub fn validate_hostname(hostname: &str) -> bool {
    let Some(ascii) = to_ascii_hostname(hostname) else {
        return false;
    };

    if wire_length(&ascii) > MAX_WIRE_NAME_LEN {
        return false;
    }

    let body = ascii.strip_suffix('.').unwrap_or(&ascii);
    body.split('.')
        .all(|label| LABEL_PATTERN.is_match(label).unwrap_or(false))
}

/// Encoded length of `ascii` as an absolute name: one length octet per label
/// in place of each dot, plus the root label.
fn wire_length(ascii: &str) -> usize {
    let absolute_len = if ascii.ends_with('.') {
        ascii.len()
    } else {
        ascii.len() + 1
    };
    absolute_len + 1
}

/// True for a dotted-quad IPv4 address or a textual IPv6 address.
pub fn validate_ip_address(input: &str) -> bool {
    input.parse::<IpAddr>().is_ok()
}

/// True when the upper-cased token names a type in `supported`.
pub fn validate_record_type(input: &str, supported: &[RecordType]) -> bool {
    input
        .to_uppercase()
        .parse::<RecordType>()
        .map(|rt| supported.contains(&rt))
        .unwrap_or(false)
}
