use super::{dto::JwtClaims, error::AuthError, User};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

const BEARER: &str = "Bearer ";

///
/// Checks signature, algorithm and expiration of bearer tokens
///
pub struct JwtVerifier {
    validation: Validation,
    key: DecodingKey,
}

impl JwtVerifier {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        Self { validation, key }
    }

    pub fn verify(&self, headers: &HeaderMap) -> Result<User, AuthError> {
        let token = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::IllegalCharacter)?
            .strip_prefix(BEARER)
            .ok_or(AuthError::UnsupportedScheme)?;

        let token_data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &self.validation)?;

        Ok(User::new(token_data.claims.sub))
    }
}
