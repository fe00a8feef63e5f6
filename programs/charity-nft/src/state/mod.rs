pub mod collection;
pub mod config;
pub mod nft;
pub mod purchase;
pub mod tier;
pub mod token_info;

pub use collection::*;
pub use config::*;
pub use nft::*;
pub use purchase::*;
pub use tier::*;
pub use token_info::*;
