//! Response bodies returned by Clef on HTTP 200.
//!
//! Every response carries a `success` flag. It is kept for callers that want
//! it, but the client decides success from the status code alone.
//!
//! Missing and `null` fields decode as empty values: a 200 body is never
//! rejected for leaving something out.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of exchanging an authorization code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    /// Access token used for subsequent `info` calls.
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Profile of the logged in Clef user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Clef user id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl UserInfo {
    /// First and last name joined, skipping empty parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of an `info` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    #[serde(default)]
    pub info: Option<UserInfo>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Result of exchanging a logout token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// Clef id of the user whose session ended.
    #[serde(default, deserialize_with = "null_as_default")]
    pub clef_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Result of a swag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwagResponse {
    /// Whether Clef accepted the order.
    #[serde(rename = "message", default, deserialize_with = "null_as_default")]
    pub acknowledged: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}
