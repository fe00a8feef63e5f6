pub mod initialize_token;
pub mod mint_reward;

pub use initialize_token::InitializeToken;
pub use mint_reward::MintReward;

pub(crate) use initialize_token::__client_accounts_initialize_token;
pub(crate) use mint_reward::__client_accounts_mint_reward;
