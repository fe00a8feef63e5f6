pub mod create_collection;
pub mod mint_nft;

pub use create_collection::CreateNftCollection;
pub use mint_nft::MintNft;

pub(crate) use create_collection::__client_accounts_create_nft_collection;
pub(crate) use mint_nft::__client_accounts_mint_nft;
