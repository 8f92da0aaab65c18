use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::{SecurityScheme, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;

use crate::api::error::ErrorResponse;
use crate::config::auth_config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    is_admin: bool,
    exp: usize,
}

/// Caller resolved from a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_admin: bool,
}

/// What an endpoint demands from its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Authenticated,
    Admin,
}

impl AuthenticatedUser {
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::Authenticated => true,
            Capability::Admin => self.is_admin,
        }
    }

    /// Returns the 403 body when the caller lacks `capability`.
    pub fn require(&self, capability: Capability) -> Result<(), Json<ErrorResponse>> {
        if self.can(capability) {
            return Ok(());
        }
        tracing::warn!(user_id = %self.user_id, "admin capability required");
        Err(Json(ErrorResponse::new("Forbidden", "auth.admin_required")))
    }
}

fn decode_user(token: &str, secret: &str) -> Result<AuthenticatedUser, String> {
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    if token_data.claims.sub.trim().is_empty() {
        return Err("auth.missing_subject".to_string());
    }

    Ok(AuthenticatedUser {
        user_id: UserId::new(token_data.claims.sub),
        is_admin: token_data.claims.is_admin,
    })
}

/// HS256 bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub AuthenticatedUser);

async fn jwt_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(config) = req.data::<AuthConfig>() else {
        tracing::error!("auth config missing from request data");
        return None;
    };

    match decode_user(&bearer.token, &config.jwt_secret) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("JWT auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn token(sub: &str, is_admin: bool, exp_offset: i64, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            is_admin,
            exp: (Utc::now().timestamp() + exp_offset) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn should_decode_admin_token() {
        // Arrange
        let token = token("admin-1", true, 3600, SECRET);

        // Act
        let user = decode_user(&token, SECRET).unwrap();

        // Assert
        assert_eq!(user.user_id.as_str(), "admin-1");
        assert!(user.is_admin);
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let token = token("admin-1", true, 3600, "other-secret");

        let result = decode_user(&token, SECRET);

        assert!(result.unwrap_err().contains("auth.token_validation_failed"));
    }

    #[test]
    fn should_reject_expired_token() {
        let token = token("customer-1", false, -3600, SECRET);

        assert!(decode_user(&token, SECRET).is_err());
    }

    #[test]
    fn should_reject_malformed_token() {
        assert!(decode_user("not-a-jwt", SECRET).is_err());
    }

    #[test]
    fn should_reject_blank_subject() {
        let token = token("  ", false, 3600, SECRET);

        assert_eq!(decode_user(&token, SECRET).unwrap_err(), "auth.missing_subject");
    }

    #[test]
    fn should_let_customer_through_authenticated_endpoints_only() {
        let customer = AuthenticatedUser {
            user_id: UserId::new("customer-1"),
            is_admin: false,
        };

        assert!(customer.require(Capability::Authenticated).is_ok());
        let forbidden = customer.require(Capability::Admin).unwrap_err();
        assert_eq!(forbidden.0.name, "Forbidden");
        assert_eq!(forbidden.0.message, "auth.admin_required");
    }

    #[test]
    fn should_let_admin_through_admin_endpoints() {
        let admin = AuthenticatedUser {
            user_id: UserId::new("admin-1"),
            is_admin: true,
        };

        assert!(admin.require(Capability::Admin).is_ok());
    }
}
