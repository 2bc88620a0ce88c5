//! Custom types we use.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::RuntimeDebug;
#[cfg(feature = "std")]
use frame_support::{Deserialize, Serialize};
use scale_info::TypeInfo;

/// The lock information.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct LockInfo<AccountId, Balance, Moment> {
    /// The balance held in custody under this lock.
    pub amount: Balance,
    /// The moment starting from which the balance can be released by anyone.
    pub release_time: Moment,
    /// The account that created the lock, the only one allowed to release it early.
    pub locker: AccountId,
}
