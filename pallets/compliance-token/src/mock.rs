use crate as pallet_compliance_token;
use crate::Role;
use frame_support::{
    derive_impl, parameter_types,
    pallet_prelude::DispatchResult,
    traits::{ConstU32, ConstU64, ConstU8},
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
        ComplianceToken: pallet_compliance_token,
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

/// Holds every role and is whitelisted at genesis.
pub const ADMIN: u64 = 1;
/// Whitelisted at genesis with 1_000_000 units.
pub const ALICE: u64 = 2;
/// Whitelisted at genesis with 500_000 units.
pub const BOB: u64 = 3;
/// Not whitelisted, no balance.
pub const CHARLIE: u64 = 4;
pub const DAVE: u64 = 5;
/// The null account for `u64` ids.
pub const NULL: u64 = 0;

pub const MAX_BATCH: u32 = 10;

parameter_types! {
    pub static MaxSupply: u128 = 10_000_000;
    /// When set, the observer makes this call from inside `on_issued`.
    pub static ReenterOnIssue: Option<Reentry> = None;
    /// Outcome of the nested call.
    pub static ReentryOutcome: Option<DispatchResult> = None;
    /// Every `(from, to, amount)` the observer saw, `None` marking issue/redeem sides.
    pub static Movements: Vec<(Option<u64>, Option<u64>, u128)> = vec![];
}

/// A mutating call the observer can make while the lock is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reentry {
    Issue,
    Approve,
    RemoveFromWhitelist,
    BatchAddToWhitelist,
    Pause,
    GrantRole,
    RenounceRole,
    AuthorizeUpgrade,
}

impl Reentry {
    pub const ALL: [Reentry; 8] = [
        Reentry::Issue,
        Reentry::Approve,
        Reentry::RemoveFromWhitelist,
        Reentry::BatchAddToWhitelist,
        Reentry::Pause,
        Reentry::GrantRole,
        Reentry::RenounceRole,
        Reentry::AuthorizeUpgrade,
    ];

    fn call(self, to: u64) -> DispatchResult {
        let admin = RuntimeOrigin::signed(ADMIN);
        match self {
            Reentry::Issue => ComplianceToken::issue(admin, to, 1),
            Reentry::Approve => ComplianceToken::approve(admin, DAVE, 1),
            Reentry::RemoveFromWhitelist => ComplianceToken::remove_from_whitelist(admin, to),
            Reentry::BatchAddToWhitelist => {
                ComplianceToken::batch_add_to_whitelist(admin, vec![CHARLIE], 0, 1)
            },
            Reentry::Pause => ComplianceToken::pause(admin),
            Reentry::GrantRole => ComplianceToken::grant_role(admin, Role::Issuer, DAVE),
            Reentry::RenounceRole => ComplianceToken::renounce_role(admin, Role::Issuer),
            Reentry::AuthorizeUpgrade => {
                ComplianceToken::authorize_upgrade(admin, H256::repeat_byte(7))
            },
        }
    }
}

pub struct RecordingObserver;
impl crate::TokenObserver<u64> for RecordingObserver {
    fn on_issued(to: &u64, amount: u128) {
        Movements::mutate(|m| m.push((None, Some(*to), amount)));
        if let Some(reentry) = ReenterOnIssue::get() {
            ReentryOutcome::set(Some(reentry.call(*to)));
        }
    }

    fn on_redeemed(from: &u64, amount: u128) {
        Movements::mutate(|m| m.push((Some(*from), None, amount)));
    }

    fn on_transferred(from: &u64, to: &u64, amount: u128) {
        Movements::mutate(|m| m.push((Some(*from), Some(*to), amount)));
    }
}

impl pallet_compliance_token::Config for Test {
    type MaxSupply = MaxSupply;
    type MaxBatchSize = ConstU32<MAX_BATCH>;
    type Decimals = ConstU8<6>;
    type InitializeOrigin = frame_system::EnsureRoot<u64>;
    type OnTokenMovement = RecordingObserver;
    type WeightInfo = ();
}

/// Genesis with the admin initialized, `ALICE` and `BOB` whitelisted and funded.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(
        10_000_000,
        Some(ADMIN),
        vec![ALICE, BOB],
        vec![(ALICE, 1_000_000), (BOB, 500_000)],
    )
}

/// Genesis with a custom cap and no initial balances.
pub fn new_test_ext_with_cap(cap: u128) -> sp_io::TestExternalities {
    build_ext(cap, Some(ADMIN), vec![ALICE, BOB], vec![])
}

/// Genesis without an admin, leaving `initialize` to be called.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build_ext(10_000_000, None, vec![], vec![])
}

/// Builds storage from the given cap, admin, whitelist and balances.
pub fn build_ext(
    cap: u128,
    admin: Option<u64>,
    whitelisted_accounts: Vec<u64>,
    initial_balances: Vec<(u64, u128)>,
) -> sp_io::TestExternalities {
    MaxSupply::set(cap);
    ReenterOnIssue::set(None);
    ReentryOutcome::set(None);
    Movements::set(vec![]);
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_compliance_token::GenesisConfig::<Test> {
        admin,
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        whitelisted_accounts,
        initial_balances,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
