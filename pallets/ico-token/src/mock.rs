use crate as pallet_ico_token;
use crate::{Category, DistributionMode, UNIT};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        IcoToken: pallet_ico_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
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
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

/// Deployer: admin origin, whitelisted and transfer agent from genesis.
pub const CREATOR: u64 = 1;
/// Whitelisted operator without transfer-agent rights.
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
pub const DAVE: u64 = 5;

pub const TREASURY_WALLET: u64 = 10;
pub const COMMUNITY_WALLET: u64 = 11;
pub const ADOPTION_WALLET: u64 = 12;
pub const PARTNERSHIP_WALLET: u64 = 13;
pub const MARKETING_WALLET: u64 = 14;
pub const TEAM_WALLET: u64 = 15;
pub const ADVISORS_WALLET: u64 = 16;

/// 2018-11-30T00:00:00Z
pub const ICO_END: u64 = 1_543_536_000;
pub const DAY: u64 = 24 * 60 * 60;
/// Clock value every test starts at: a month before the sale ends.
pub const SALE_START: u64 = ICO_END - 30 * DAY;

parameter_types! {
    pub const AdminAccount: u64 = CREATOR;
    pub static MaxSupply: u128 = 950_000_000 * UNIT;
    pub const MaxBulkTransfers: u32 = 8;
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

impl pallet_ico_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAdmin;
    type UnixTime = Timestamp;
    type MaxSupply = MaxSupply;
    type MaxBulkTransfers = MaxBulkTransfers;
    type WeightInfo = ();
}

/// Move the host clock to `secs` (unix seconds).
pub fn set_now(secs: u64) {
    Timestamp::set_timestamp(secs * 1_000);
}

pub fn vesting_wallets() -> Vec<(Category, u64)> {
    vec![
        (Category::Treasury, TREASURY_WALLET),
        (Category::CommunityRewards, COMMUNITY_WALLET),
        (Category::UserAdoption, ADOPTION_WALLET),
        (Category::Partnership, PARTNERSHIP_WALLET),
        (Category::Marketing, MARKETING_WALLET),
        (Category::Team, TEAM_WALLET),
        (Category::Advisors, ADVISORS_WALLET),
    ]
}

fn build_ext(mode: DistributionMode, wallets: Vec<(Category, u64)>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_ico_token::GenesisConfig::<Test> {
        creator: Some(CREATOR),
        token_name: b"Sale Token".to_vec(),
        token_symbol: b"SALE".to_vec(),
        decimals: 18,
        whitelisted_accounts: vec![ALICE],
        transfer_agents: vec![],
        mode,
        wallets,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        set_now(SALE_START);
    });
    ext
}

// Build genesis storage for the on-demand issuance deployment.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(DistributionMode::Issuance, vec![])
}

// Build genesis storage for the pre-minted vesting deployment.
pub fn new_vesting_ext() -> sp_io::TestExternalities {
    build_ext(DistributionMode::Vesting, vesting_wallets())
}

// Vesting deployment with only some wallets assigned.
pub fn new_vesting_ext_with(wallets: Vec<(Category, u64)>) -> sp_io::TestExternalities {
    build_ext(DistributionMode::Vesting, wallets)
}
