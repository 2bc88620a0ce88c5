//! Mock utils.

use frame_support::dispatch::DispatchResult;
use mockall::mock;

use super::*;
use crate::traits;

mock! {
    #[derive(Debug)]
    pub AssetLedger {}
    impl traits::AssetLedger<AccountId> for AssetLedger {
        type AssetId = AssetId;
        type Balance = Balance;

        fn balance_of(asset: &AssetId, who: &AccountId) -> Balance;

        fn approve(
            asset: &AssetId,
            owner: &AccountId,
            spender: &AccountId,
            amount: Balance,
        ) -> DispatchResult;

        fn transfer_from(
            asset: &AssetId,
            spender: &AccountId,
            owner: &AccountId,
            to: &AccountId,
            amount: Balance,
        ) -> DispatchResult;

        fn transfer(
            asset: &AssetId,
            from: &AccountId,
            to: &AccountId,
            amount: Balance,
        ) -> DispatchResult;
    }
}

mock! {
    #[derive(Debug)]
    pub Time {}
    impl frame_support::traits::Time for Time {
        type Moment = Moment;

        fn now() -> Moment;
    }
}

pub fn runtime_lock() -> std::sync::MutexGuard<'static, ()> {
    static MOCK_RUNTIME_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

    // Ignore the poisoning for the tests that panic.
    // We only care about concurrency here, not about the poisoning.
    match MOCK_RUNTIME_MUTEX.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub trait TestExternalitiesExt {
    fn execute_with_ext<R, E>(&mut self, execute: E) -> R
    where
        E: for<'e> FnOnce(&'e ()) -> R;
}

impl TestExternalitiesExt for frame_support::sp_io::TestExternalities {
    fn execute_with_ext<R, E>(&mut self, execute: E) -> R
    where
        E: for<'e> FnOnce(&'e ()) -> R,
    {
        let guard = runtime_lock();
        let result = self.execute_with(|| execute(&guard));
        drop(guard);
        result
    }
}
