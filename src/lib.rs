pub mod config;
pub mod modules;
pub mod shared;

pub use modules::{admin, credentials, user};

#[cfg(test)]
mod tests;
