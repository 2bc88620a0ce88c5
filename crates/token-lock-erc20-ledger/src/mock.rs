use frame_support::{
    parameter_types, sp_io,
    sp_runtime::{
        testing::Header,
        traits::{BlakeTwo256, IdentityLookup},
        BuildStorage,
    },
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;

use super::*;

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

pub type AccountId = u64;
pub type AssetId = u32;
pub type Balance = u128;
pub type UnixMilliseconds = u64;

frame_support::construct_runtime!(
    pub struct Test
    where
        Block = Block,
        NodeBlock = Block,
        UncheckedExtrinsic = UncheckedExtrinsic,
    {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Erc20Assets: pallet_erc20_assets,
        TokenLock: pallet_token_lock,
    }
);

impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Index = u64;
    type BlockNumber = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = IdentityLookup<AccountId>;
    type Header = Header;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = UnixMilliseconds;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

impl pallet_erc20_assets::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AssetId = AssetId;
    type Balance = Balance;
    type StringLimit = ConstU32<32>;
    type WeightInfo = ();
}

parameter_types! {
    pub const TokenLockPalletId: PalletId = PalletId(*b"tokenlck");
}

impl pallet_token_lock::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AssetId = AssetId;
    type Balance = Balance;
    type AssetLedger = Erc20AssetsLedger<Test>;
    type Time = Timestamp;
    type PalletId = TokenLockPalletId;
    type WeightInfo = ();
}

pub const MY_TOKEN: AssetId = 1;
pub const DEPLOYER: AccountId = 1;
pub const BENEFICIARY: AccountId = 2;
pub const STRANGER: AccountId = 3;

/// 300 million tokens with 18 decimals.
pub const MY_TOKEN_SUPPLY: Balance = 300_000_000 * 10_u128.pow(18);

/// The timestamp the tests start at.
pub const START: UnixMilliseconds = 1_000_000;
/// One hour in milliseconds.
pub const HOUR: UnixMilliseconds = 60 * 60 * 1000;

pub fn new_test_ext() -> sp_io::TestExternalities {
    let genesis_config = GenesisConfig {
        system: Default::default(),
        erc20_assets: pallet_erc20_assets::GenesisConfig {
            assets: vec![(
                MY_TOKEN,
                DEPLOYER,
                MY_TOKEN_SUPPLY,
                b"MyToken".to_vec(),
                b"MTK".to_vec(),
                18,
            )],
        },
    };
    let storage = genesis_config.build_storage().unwrap();
    let mut ext: sp_io::TestExternalities = storage.into();
    ext.execute_with(|| {
        // Events are not recorded at the genesis block.
        System::set_block_number(1);
        Timestamp::set_timestamp(START);
    });
    ext
}
