pub mod admin_accounts;

pub use admin_accounts::AdminAccountsUseCase;
