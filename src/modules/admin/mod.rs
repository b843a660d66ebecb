//! Administrator accounts: identity and role for back-office access.

pub mod adapter;
pub mod application;
