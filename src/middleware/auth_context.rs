use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest,
};

use crate::middleware::auth::Claims;

/// Caller identity extracted from the claims left by [`AuthMiddleware`](super::auth::AuthMiddleware).
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Email used for owner checks; empty when the token carries none.
    pub fn email_or_empty(&self) -> &str {
        self.email().unwrap_or_default()
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(claims) = req.extensions().get::<Claims>() {
            let email = Some(claims.sub.trim())
                .filter(|sub| !sub.is_empty())
                .map(String::from);
            ready(Ok(AuthenticatedUser { email }))
        } else {
            ready(Err(ErrorUnauthorized("User not authenticated")))
        }
    }
}
