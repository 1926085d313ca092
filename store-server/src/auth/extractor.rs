//! JWT Extractors
//!
//! Custom extractors that validate bearer tokens and resolve the calling
//! principal. Handlers declare the access level they need by the parameter
//! type: [`CurrentAdmin`] for back-office routes, [`CurrentCustomer`] for
//! account routes, [`OptionalCustomer`] for routes that work both ways.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::jwt::{Claims, JwtError, ROLE_ADMIN, ROLE_CUSTOMER};
use crate::auth::JwtService;
use crate::core::ServerState;
use shared::error::AppError;

/// Authenticated admin principal
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    /// Admin record id ("admin:...")
    pub id: String,
    pub username: String,
}

/// Authenticated customer principal
#[derive(Debug, Clone)]
pub struct CurrentCustomer {
    /// Customer record id ("customer:...")
    pub id: String,
    pub name: String,
}

/// Customer principal when present, `None` for anonymous requests
///
/// Requests with a malformed or expired token are still rejected; only a
/// missing Authorization header falls through to `None`.
#[derive(Debug, Clone)]
pub struct OptionalCustomer(pub Option<CurrentCustomer>);

impl TryFrom<Claims> for CurrentAdmin {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.role != ROLE_ADMIN {
            return Err(AppError::admin_required());
        }
        Ok(Self {
            id: claims.sub,
            username: claims.name,
        })
    }
}

impl TryFrom<Claims> for CurrentCustomer {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.role != ROLE_CUSTOMER {
            return Err(AppError::permission_denied("Customer account required"));
        }
        Ok(Self {
            id: claims.sub,
            name: claims.name,
        })
    }
}

/// Pull the bearer token out of the request, if any
fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(header) = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(None);
    };

    JwtService::extract_from_header(header)
        .map(Some)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))
}

/// Validate the token and return its claims, caching them in extensions
fn validate(parts: &mut Parts, state: &ServerState, token: &str) -> Result<Claims, AppError> {
    if let Some(claims) = parts.extensions.get::<Claims>() {
        return Ok(claims.clone());
    }

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            parts.extensions.insert(claims.clone());
            Ok(claims)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %parts.uri, "token validation failed");
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

impl FromRequestParts<ServerState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts)? else {
            tracing::warn!(uri = %parts.uri, "missing authorization header");
            return Err(AppError::unauthorized());
        };
        let token = token.to_string();
        let claims = validate(parts, state, &token)?;
        CurrentAdmin::try_from(claims)
    }
}

impl FromRequestParts<ServerState> for CurrentCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts)? else {
            tracing::warn!(uri = %parts.uri, "missing authorization header");
            return Err(AppError::unauthorized());
        };
        let token = token.to_string();
        let claims = validate(parts, state, &token)?;
        CurrentCustomer::try_from(claims)
    }
}

/// Any authenticated principal, for routes shared by admins and customers
#[derive(Debug, Clone)]
pub enum Principal {
    Admin(CurrentAdmin),
    Customer(CurrentCustomer),
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin(_))
    }
}

impl TryFrom<Claims> for Principal {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        match claims.role.as_str() {
            ROLE_ADMIN => CurrentAdmin::try_from(claims).map(Principal::Admin),
            ROLE_CUSTOMER => CurrentCustomer::try_from(claims).map(Principal::Customer),
            other => Err(AppError::invalid_token(format!("unknown role '{other}'"))),
        }
    }
}

impl FromRequestParts<ServerState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts)? else {
            tracing::warn!(uri = %parts.uri, "missing authorization header");
            return Err(AppError::unauthorized());
        };
        let token = token.to_string();
        let claims = validate(parts, state, &token)?;
        Principal::try_from(claims)
    }
}

impl FromRequestParts<ServerState> for OptionalCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts)? else {
            return Ok(OptionalCustomer(None));
        };
        let token = token.to_string();
        let claims = validate(parts, state, &token)?;
        Ok(OptionalCustomer(Some(CurrentCustomer::try_from(claims)?)))
    }
}
