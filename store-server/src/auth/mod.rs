//! Authentication module
//!
//! JWT issuance and validation, password hashing, and request extractors:
//! - [`JwtService`] - token service
//! - [`CurrentAdmin`] / [`CurrentCustomer`] - authenticated principals
//! - [`OptionalCustomer`] - principal for routes open to guests

pub mod extractor;
pub mod jwt;
pub mod password;

pub use extractor::{CurrentAdmin, CurrentCustomer, OptionalCustomer, Principal};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService, ROLE_ADMIN, ROLE_CUSTOMER};
pub use password::{hash_password, verify_password};
