pub mod user_accounts;

pub use user_accounts::UserAccountsUseCase;
