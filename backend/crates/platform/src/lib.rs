//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations that are not tied to one domain:
//! - Password policy (NFKC normalization, length bounds)
//! - Password hashing and verification (Argon2id, salted, optional pepper)

pub mod password;
