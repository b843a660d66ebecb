//! Credential lifecycle shared by every account type: hash a newly set
//! secret before it is stored, keep the stored hash when the secret did not
//! change, and check login candidates against the stored hash.

pub mod adapter;
pub mod application;
