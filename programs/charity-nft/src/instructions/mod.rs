pub mod admin;
pub mod helpers;
pub mod market;
pub mod nft;
pub mod token;

pub use admin::*;
pub use market::*;
pub use nft::*;
pub use token::*;
