use anchor_lang::prelude::*;

/// Emitted when the protocol is initialized
#[event]
pub struct ProtocolInitialized {
    /// The config PDA address
    pub config: Pubkey,
    /// The admin authority
    pub admin: Pubkey,
    /// Wallet receiving all tier payments
    pub charity_wallet: Pubkey,
    /// Mint of the reward token
    pub reward_mint: Pubkey,
    /// Decimals of the reward mint
    pub reward_decimals: u8,
    /// Number of tiers seeded into the inventory
    pub tier_count: u8,
    /// Unix timestamp of initialization
    pub initialized_at: i64,
}

/// Emitted when config is updated
#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub charity_wallet: Pubkey,
    pub reward_mint: Pubkey,
    pub paused: bool,
}

/// Emitted when token metadata is registered for a mint
#[event]
pub struct TokenRegistered {
    /// The PDA address of the TokenInfo account
    pub token_info: Pubkey,
    /// The mint the metadata describes
    pub mint: Pubkey,
    /// Display name (e.g., "Charity Token")
    pub name: String,
    /// Ticker symbol (e.g., "CHAR")
    pub symbol: String,
    /// Decimals recorded for the mint
    pub decimals: u8,
    /// Who registered the metadata
    pub authority: Pubkey,
    /// Unix timestamp of registration
    pub registered_at: i64,
}

/// Emitted when reward tokens are minted outside a purchase (admin path)
#[event]
pub struct RewardMinted {
    /// The reward mint
    pub mint: Pubkey,
    /// Token account receiving the minted amount
    pub destination: Pubkey,
    /// Amount minted in base units
    pub amount: u64,
    /// Admin who authorized the mint
    pub authority: Pubkey,
    /// Unix timestamp
    pub minted_at: i64,
}

/// Emitted when a tier purchase settles
#[event]
pub struct NftPurchased {
    /// The PDA address of the PurchaseRecord account
    pub record: Pubkey,
    /// The buyer who paid and received rewards
    pub buyer: Pubkey,
    /// Tier that was purchased
    pub tier_id: u8,
    /// Lamports transferred to the charity wallet
    pub amount_paid: u64,
    /// Reward tokens minted to the buyer, in base units
    pub reward_minted: u64,
    /// Units left in the tier after this sale
    pub remaining: u16,
    /// Sequence number of this purchase
    pub index: u64,
    /// Unix timestamp of settlement
    pub purchased_at: i64,
}

/// Emitted when an NFT collection record is created
#[event]
pub struct CollectionCreated {
    /// The PDA address of the CollectionInfo account
    pub collection_info: Pubkey,
    /// The collection mint
    pub mint: Pubkey,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Off-chain metadata URI
    pub uri: String,
    /// Royalty in basis points
    pub seller_fee_basis_points: u16,
    /// Authority allowed to mint assets into the collection
    pub authority: Pubkey,
    /// Unix timestamp
    pub created_at: i64,
}

/// Emitted when an NFT is minted into a collection
#[event]
pub struct NftMinted {
    /// The PDA address of the NftInfo account
    pub nft_info: Pubkey,
    /// The asset mint
    pub mint: Pubkey,
    /// The collection mint the asset belongs to
    pub collection: Pubkey,
    /// Asset name
    pub name: String,
    /// Asset symbol
    pub symbol: String,
    /// Owner of the freshly minted asset
    pub owner: Pubkey,
    /// Unix timestamp
    pub minted_at: i64,
}
