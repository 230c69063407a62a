
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};

use crate::{MultiTokenPayroll, MultiTokenPayrollClient};

pub(crate) struct TestPayroll {
    pub env: Env,
    pub client: MultiTokenPayrollClient<'static>,
    pub owner: Address,
    pub oracle: Address,
    pub reference: Address,
}

pub(crate) fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub(crate) fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

pub(crate) fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|ledger| {
        ledger.timestamp = timestamp;
    });
}

/// Payroll with the reference token registered at rate 1.
pub(crate) fn setup() -> TestPayroll {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let oracle = Address::generate(&env);
    let reference = create_token(&env);

    let contract_id = env.register(
        MultiTokenPayroll,
        (owner.clone(), oracle.clone(), reference.clone(), 1_i128),
    );
    let client = MultiTokenPayrollClient::new(&env, &contract_id);

    TestPayroll {
        env,
        client,
        owner,
        oracle,
        reference,
    }
}
