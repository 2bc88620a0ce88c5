//! The runtime APIs.

use codec::{Codec, Decode};

use crate::types::LockInfo;

sp_api::decl_runtime_apis! {
    /// A runtime API for querying the token locks.
    pub trait TokenLockApi<AssetId, AccountId, Balance, Moment>
    where
        AssetId: Codec,
        AccountId: Codec,
        Balance: Decode,
        Moment: Decode,
    {
        /// Get the lock currently engaged for a given asset and beneficiary, if any.
        fn lock_info(
            asset: AssetId,
            beneficiary: AccountId,
        ) -> Option<LockInfo<AccountId, Balance, Moment>>;

        /// Get the account that holds the locked funds in custody.
        fn custody_account_id() -> AccountId;
    }
}
