//! End-user accounts with profile and activation state.

pub mod adapter;
pub mod application;
