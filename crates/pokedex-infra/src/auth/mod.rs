//! Authentication implementations.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtTokenService, TOKEN_TTL_SECS};
pub use password::Argon2PasswordService;
