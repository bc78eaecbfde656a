//! Authentication: token issuance and validation, password hashing, and
//! the bearer-token middleware guarding protected routes.

pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::{AuthUser, require_auth};
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenError, TokenService};
