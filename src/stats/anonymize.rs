//! Client identifier anonymization
//!
//! A cheap, deterministic, non-cryptographic hash. Collisions are fine: the
//! token only groups plays from the same client in the stats report.

/// Token used when no client identifier is available
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Hash a client identifier into a short base-36 token
///
/// Runs `hash = hash * 31 + unit` over the UTF-16 code units with 32-bit
/// wrapping, then renders the absolute value in base 36.
///
/// # Examples
/// ```
/// use connections::stats::anonymize::hash_client;
///
/// assert_eq!(hash_client(Some("a")), "2p");
/// assert_eq!(hash_client(None), "unknown");
/// ```
#[must_use]
pub fn hash_client(client: Option<&str>) -> String {
    let Some(client) = client.filter(|c| !c.is_empty()) else {
        return UNKNOWN_CLIENT.to_string();
    };

    let hash = client.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });

    to_base36(i64::from(hash).unsigned_abs())
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(hash_client(Some("a")), "2p");
        assert_eq!(hash_client(Some("ab")), "2e9");
    }

    #[test]
    fn deterministic() {
        let ip = "203.0.113.42";
        assert_eq!(hash_client(Some(ip)), hash_client(Some(ip)));
        assert_ne!(hash_client(Some(ip)), hash_client(Some("203.0.113.43")));
    }

    #[test]
    fn missing_input_is_unknown() {
        assert_eq!(hash_client(None), UNKNOWN_CLIENT);
        assert_eq!(hash_client(Some("")), UNKNOWN_CLIENT);
    }

    #[test]
    fn token_is_short_base36() {
        let token = hash_client(Some("2001:db8::ff00:42:8329, 10.0.0.1"));
        assert!(token.len() <= 7);
        assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn base36_zero() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
