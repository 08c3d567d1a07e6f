//! Data models for the Clef API.
//!
//! Response models use `#[serde(default)]` so fields Clef omits decode as
//! empty values instead of failing the whole call.

mod inputs;
mod responses;

pub use inputs::SwagRequest;
pub use responses::{AuthorizeResponse, InfoResponse, LogoutResponse, SwagResponse, UserInfo};
