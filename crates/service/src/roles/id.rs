use crate::errors::ServiceError;

pub const INVALID_ID_MESSAGE: &str = "Invalid role ID";

/// Parse a path id as a lenient base-10 integer.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then the longest
/// run of ASCII digits is taken and anything after it ignored, so `"12abc"`
/// parses as `12`. No digits at all is `InvalidId`. A digit run outside `i64`
/// saturates to `i64::MAX`/`i64::MIN`, which no record carries.
pub fn parse_id(raw: &str) -> Result<i64, ServiceError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(invalid());
    }
    let signed_len = s.len() - rest.len() + digits_len;
    // only overflow can fail here
    Ok(s[..signed_len]
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

fn invalid() -> ServiceError {
    ServiceError::InvalidId(INVALID_ID_MESSAGE.into())
}
