pub mod purchase_nft;

pub use purchase_nft::PurchaseNft;

pub(crate) use purchase_nft::__client_accounts_purchase_nft;
