//! Benchmarking setup for pallet-ico-token

use super::*;

#[allow(unused)]
use crate::Pallet as IcoToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Whitelisted caller holding `balance`.
fn funded_operator<T: Config>(balance: u128) -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    Whitelist::<T>::insert(&caller, true);
    Balances::<T>::insert(&caller, balance);
    caller
}

/// Put every milestone behind us: sale ended at the epoch, soft cap flagged.
fn conclude_sale<T: Config>() {
    IcoEndDate::<T>::put(0);
    SoftCapReached::<T>::put(true);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_ico_end_date() {
        let caller = funded_operator::<T>(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 1_543_536_000);

        assert_eq!(IcoEndDate::<T>::get(), Some(1_543_536_000));
    }

    #[benchmark]
    fn set_soft_cap_reached() {
        let caller = funded_operator::<T>(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(SoftCapReached::<T>::get());
    }

    // Treasury reads both milestones, the heaviest gate.
    #[benchmark]
    fn mint_allocation() {
        let caller = funded_operator::<T>(0);
        Mode::<T>::put(DistributionMode::Issuance);
        conclude_sale::<T>();

        #[block]
        {
            Pallet::<T>::mint_treasury_tokens(RawOrigin::Signed(caller.clone()).into())
                .expect("treasury mint open");
        }

        assert!(Minted::<T>::get(Category::Treasury));
        assert_eq!(Balances::<T>::get(&caller), Category::Treasury.amount());
    }

    #[benchmark]
    fn enable_transfers() {
        let caller = funded_operator::<T>(0);
        conclude_sale::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(TransfersEnabled::<T>::get());
    }

    #[benchmark]
    fn disable_transfers() {
        let caller = funded_operator::<T>(0);
        TransfersEnabled::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!TransfersEnabled::<T>::get());
    }

    #[benchmark]
    fn set_transfer_agent() {
        let caller = funded_operator::<T>(0);
        let agent: T::AccountId = account("agent", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), agent.clone(), true);

        assert!(TransferAgents::<T>::get(&agent));
    }

    #[benchmark]
    fn add_to_whitelist() {
        let account: T::AccountId = account("operator", 0, 0);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account.clone());

        assert!(Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let account: T::AccountId = account("operator", 0, 0);
        Whitelist::<T>::insert(&account, true);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account.clone());

        assert!(!Whitelist::<T>::get(&account));
    }

    // Worst case: non-agent sender carrying both released wallet locks.
    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&caller, 10_000_000);
        TransfersEnabled::<T>::put(true);
        TransfersAfterIco::<T>::insert(&caller, true);
        TransfersAfterOneYear::<T>::insert(&caller, true);
        conclude_sale::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, amount);
        TransfersEnabled::<T>::put(true);
        TransfersAfterIco::<T>::insert(&owner, true);
        TransfersAfterOneYear::<T>::insert(&owner, true);
        conclude_sale::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        TransfersEnabled::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 500);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 500);
    }

    #[benchmark]
    fn increase_allowance() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        TransfersEnabled::<T>::put(true);
        Allowances::<T>::insert(&owner, &spender, 100);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 50);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 150);
    }

    #[benchmark]
    fn decrease_allowance() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        TransfersEnabled::<T>::put(true);
        Allowances::<T>::insert(&owner, &spender, 100);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 30);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 70);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 1_000);
        TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(1_000));
        let supply_before = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 400);

        assert_eq!(Balances::<T>::get(&caller), 600);
        assert_eq!(TotalSupply::<T>::get(), supply_before - 400);
    }

    // Same gate worst case as `transfer`, paid out `n` times.
    #[benchmark]
    fn bulk_transfer(n: Linear<1, { T::MaxBulkTransfers::get() }>) {
        let caller = funded_operator::<T>(u128::from(n) * 1_000);
        TransfersEnabled::<T>::put(true);
        TransfersAfterIco::<T>::insert(&caller, true);
        TransfersAfterOneYear::<T>::insert(&caller, true);
        conclude_sale::<T>();
        let destinations: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, 0)).collect();
        let amounts: Vec<u128> = (0..n).map(|_| 1_000).collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), destinations.clone(), amounts);

        assert_eq!(Balances::<T>::get(&caller), 0);
        for destination in destinations {
            assert_eq!(Balances::<T>::get(&destination), 1_000);
        }
    }

    #[benchmark]
    fn initialize() {
        let caller = funded_operator::<T>(TOTAL_ALLOCATIONS);
        Mode::<T>::put(DistributionMode::Vesting);
        Creator::<T>::put(&caller);
        for (index, category) in Category::ALL.into_iter().enumerate() {
            let wallet: T::AccountId = account("wallet", index as u32, 0);
            Wallets::<T>::insert(category, wallet);
        }

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert!(Initialized::<T>::get());
        assert_eq!(Balances::<T>::get(&caller), 0);
    }

    #[benchmark]
    fn set_wallet() {
        let caller = funded_operator::<T>(0);
        let wallet: T::AccountId = account("wallet", 0, 0);
        Mode::<T>::put(DistributionMode::Vesting);

        #[block]
        {
            Pallet::<T>::set_team_wallet(RawOrigin::Signed(caller).into(), wallet.clone())
                .expect("wallet setter open before initialization");
        }

        assert_eq!(Wallets::<T>::get(Category::Team), Some(wallet));
    }

    impl_benchmark_test_suite!(IcoToken, crate::mock::new_test_ext(), crate::mock::Test);
}
