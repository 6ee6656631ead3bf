//! # campushub-auth
//!
//! Authentication primitives for CampusHub: signed bearer tokens
//! (HMAC-SHA256 JWTs) and Argon2id password hashing.

pub mod jwt;
pub mod password;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::hasher::PasswordHasher;
