pub mod user_account_service;

pub use user_account_service::UserAccountService;
