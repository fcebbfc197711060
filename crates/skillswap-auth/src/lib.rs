//! # skillswap-auth
//!
//! Authentication primitives for Skill Swap: JWT access/refresh token
//! handling and Argon2 password hashing with strength validation.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
