use super::env::required_var;

/// Settings for validating bearer tokens.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HMAC secret the tokens are signed with (required)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            jwt_secret: required_var("JWT_SECRET")?,
        })
    }
}
