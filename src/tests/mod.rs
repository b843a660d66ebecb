mod admin_lifecycle;
pub mod support;
