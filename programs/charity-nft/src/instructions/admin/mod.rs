pub mod initialize;
pub mod update_config;

pub use initialize::Initialize;
pub use update_config::UpdateConfig;

pub(crate) use initialize::__client_accounts_initialize;
pub(crate) use update_config::__client_accounts_update_config;
