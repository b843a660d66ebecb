pub mod admin_account_service;

pub use admin_account_service::AdminAccountService;
