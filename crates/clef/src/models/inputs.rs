//! Input models for Clef API calls.

/// Shipping details for a swag order.
///
/// Application credentials are added by the client, not carried here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwagRequest {
    pub name: String,
    pub email: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub city: String,
    pub zip_code: String,
    pub state: String,
    pub country: String,
}

impl SwagRequest {
    /// Form fields in the order Clef documents them.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("address_line_1", self.address_line_1.as_str()),
            ("address_line_2", self.address_line_2.as_str()),
            ("city", self.city.as_str()),
            ("zip_code", self.zip_code.as_str()),
            ("state", self.state.as_str()),
            ("country", self.country.as_str()),
        ]
    }
}
