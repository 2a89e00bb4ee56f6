//! Token Claims
//!
//! Reads the JWT payload issued by `/auth/login`. The signature is never
//! checked here; the backend validates the token on every call.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not valid claims JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Access level carried in the `role` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Anything other than `admin` is treated as a regular user
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    pub employee_id: u32,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Expiry, seconds since the epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }

    /// Best display name available in the token
    pub fn display_name(&self) -> Option<&str> {
        self.employee_name
            .as_deref()
            .or(self.user_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Avatar initials: first letter of the first and last word
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let letters: String = match words.as_slice() {
        [] => return "U".to_string(),
        [only] => only.chars().take(1).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    letters.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = make_token(
            r#"{"employee_id": 42, "role": "admin", "employee_name": "Ada Lovelace", "exp": 1700000000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.employee_id, 42);
        assert_eq!(claims.role(), Role::Admin);
        assert_eq!(claims.display_name(), Some("Ada Lovelace"));
        assert!(claims.is_expired(1700000000));
        assert!(!claims.is_expired(1699999999));
    }

    #[test]
    fn test_decode_claims_tolerates_padding() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"employee_id":1}"#);
        let token = format!("h.{}.s", payload);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role(), Role::User);
        assert!(!claims.is_expired(i64::MAX));
    }

    #[test]
    fn test_decode_claims_rejects_garbage() {
        assert!(matches!(decode_claims("abc"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));
        let token = make_token("not json");
        assert!(matches!(decode_claims(&token), Err(TokenError::Payload(_))));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("  Grace  Brewster Hopper "), "GH");
        assert_eq!(initials("linus"), "L");
        assert_eq!(initials("   "), "U");
    }
}
