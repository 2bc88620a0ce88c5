//! Custom types we use.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::RuntimeDebug;
use scale_info::TypeInfo;

/// The details of an asset.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct AssetDetails<AccountId, Balance, BoundedString> {
    /// The account that created the asset.
    pub owner: AccountId,
    /// The amount of the asset in existence.
    pub supply: Balance,
    /// The name of the asset.
    pub name: BoundedString,
    /// The ticker symbol of the asset.
    pub symbol: BoundedString,
    /// The number of decimal places of the asset.
    pub decimals: u8,
}
