//! Event topics and payloads for every state-changing entry point.

#![cfg(test)]

use multi_token_payroll::events::{
    EmployeeAdded, EmployeeRemoved, EmployeeSalaryUpdated, ExchangeRateUpdated, OracleUpdated,
    PaymentDistributionUpdated, PaymentReceived, PayrollFunded, SupportedTokenAdded, TokenAllowed,
    DISTRIBUTION_UPDATED_EVENT, EMPLOYEE_ADDED_EVENT, EMPLOYEE_REMOVED_EVENT,
    EMPLOYEE_SALARY_UPDATED_EVENT, EXCHANGE_RATE_UPDATED_EVENT, ORACLE_UPDATED_EVENT,
    PAYMENTS_ALLOWED_EVENT, PAYMENTS_BLOCKED_EVENT, PAYMENT_RECEIVED_EVENT, PAYROLL_FUNDED_EVENT,
    SUPPORTED_TOKEN_ADDED_EVENT, TOKEN_ALLOWED_EVENT,
};
use multi_token_payroll::payroll::SECONDS_PER_MONTH;
use multi_token_payroll::{MultiTokenPayroll, MultiTokenPayrollClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{token, Address, Env, Symbol, TryFromVal, Val, Vec};

// ============================================================================
// TEST HELPERS
// ============================================================================

fn setup() -> (Env, MultiTokenPayrollClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let oracle = Address::generate(&env);
    let reference = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(
        MultiTokenPayroll,
        (owner.clone(), oracle.clone(), reference.clone(), 1_i128),
    );
    let client = MultiTokenPayrollClient::new(&env, &contract_id);
    (env, client, owner, oracle, reference)
}

/// Topics and data of the most recent event the payroll published under `topic`.
fn last_event(env: &Env, contract: &Address, topic: &Symbol) -> Option<(Vec<Val>, Val)> {
    let mut found = None;
    for (address, topics, data) in env.events().all().iter() {
        if address != *contract {
            continue;
        }
        let Some(first) = topics.get(0) else {
            continue;
        };
        if let Ok(symbol) = Symbol::try_from_val(env, &first) {
            if symbol == *topic {
                found = Some((topics, data));
            }
        }
    }
    found
}

fn last_data<T: TryFromVal<Env, Val>>(env: &Env, contract: &Address, topic: &Symbol) -> T {
    let (_, data) = last_event(env, contract, topic).expect("event not emitted");
    T::try_from_val(env, &data).unwrap_or_else(|_| panic!("event data does not decode"))
}

fn second_topic(env: &Env, contract: &Address, topic: &Symbol) -> Address {
    let (topics, _) = last_event(env, contract, topic).expect("event not emitted");
    Address::try_from_val(env, &topics.get(1).unwrap()).unwrap()
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn test_supported_token_added_event() {
    let (env, client, owner, _, _) = setup();

    let usdc = Address::generate(&env);
    client.add_supported_token(&owner, &usdc, &3);

    let added: SupportedTokenAdded =
        last_data(&env, &client.address, &SUPPORTED_TOKEN_ADDED_EVENT);
    assert_eq!(added, SupportedTokenAdded { token: usdc.clone(), rate: 3 });
    assert_eq!(second_topic(&env, &client.address, &SUPPORTED_TOKEN_ADDED_EVENT), usdc);
}

#[test]
fn test_exchange_rate_updated_event() {
    let (env, client, _, oracle, reference) = setup();

    client.set_exchange_rate(&oracle, &reference, &2);

    let updated: ExchangeRateUpdated =
        last_data(&env, &client.address, &EXCHANGE_RATE_UPDATED_EVENT);
    assert_eq!(
        updated,
        ExchangeRateUpdated {
            token: reference,
            old_rate: 1,
            new_rate: 2,
        }
    );
}

#[test]
fn test_oracle_updated_event() {
    let (env, client, owner, _, _) = setup();
    let new_oracle = Address::generate(&env);

    client.set_oracle(&owner, &new_oracle);

    let updated: OracleUpdated = last_data(&env, &client.address, &ORACLE_UPDATED_EVENT);
    assert_eq!(updated.new_oracle, new_oracle);
}

// ============================================================================
// EMPLOYEE LEDGER
// ============================================================================

#[test]
fn test_employee_lifecycle_events() {
    let (env, client, owner, _, reference) = setup();
    let employee = Address::generate(&env);

    client.add_employee(&owner, &employee, &120_000);
    let added: EmployeeAdded = last_data(&env, &client.address, &EMPLOYEE_ADDED_EVENT);
    assert_eq!(
        added,
        EmployeeAdded {
            employee: employee.clone(),
            yearly_salary: 120_000,
        }
    );
    assert_eq!(second_topic(&env, &client.address, &EMPLOYEE_ADDED_EVENT), employee);

    client.set_employee_salary(&owner, &employee, &150_000);
    let updated: EmployeeSalaryUpdated =
        last_data(&env, &client.address, &EMPLOYEE_SALARY_UPDATED_EVENT);
    assert_eq!(updated.old_salary, 120_000);
    assert_eq!(updated.new_salary, 150_000);

    client.allow_token(&owner, &employee, &reference, &7);
    let allowed: TokenAllowed = last_data(&env, &client.address, &TOKEN_ALLOWED_EVENT);
    assert_eq!(
        allowed,
        TokenAllowed {
            employee: employee.clone(),
            token: reference.clone(),
            rate_snapshot: 7,
        }
    );

    client.remove_employee(&owner, &employee);
    let removed: EmployeeRemoved = last_data(&env, &client.address, &EMPLOYEE_REMOVED_EVENT);
    assert_eq!(removed.employee, employee);
}

#[test]
fn test_distribution_event_carries_running_total() {
    let (env, client, owner, _, reference) = setup();
    let employee = Address::generate(&env);
    let usdc = Address::generate(&env);
    client.add_supported_token(&owner, &usdc, &1);
    client.add_employee(&owner, &employee, &120_000);
    client.allow_token(&owner, &employee, &reference, &1);
    client.allow_token(&owner, &employee, &usdc, &1);

    client.determine_allocation(&employee, &reference, &30);
    client.determine_allocation(&employee, &usdc, &45);

    let updated: PaymentDistributionUpdated =
        last_data(&env, &client.address, &DISTRIBUTION_UPDATED_EVENT);
    assert_eq!(
        updated,
        PaymentDistributionUpdated {
            employee,
            token: usdc,
            total_allocated: 75,
        }
    );
}

// ============================================================================
// PAYMENTS
// ============================================================================

#[test]
fn test_payment_received_event() {
    let (env, client, owner, _, reference) = setup();
    let employee = Address::generate(&env);
    token::StellarAssetClient::new(&env, &reference).mint(&client.address, &100_000);
    client.add_employee(&owner, &employee, &120_000);
    client.allow_token(&owner, &employee, &reference, &1);
    client.determine_allocation(&employee, &reference, &100);

    env.ledger().with_mut(|ledger| {
        ledger.timestamp += SECONDS_PER_MONTH;
    });
    client.payday(&employee, &reference);

    let received: PaymentReceived = last_data(&env, &client.address, &PAYMENT_RECEIVED_EVENT);
    assert_eq!(
        received,
        PaymentReceived {
            employee,
            token: reference,
            amount: 10_000,
        }
    );
}

#[test]
fn test_payroll_funded_event() {
    let (env, client, _, _, reference) = setup();
    let funder = Address::generate(&env);
    token::StellarAssetClient::new(&env, &reference).mint(&funder, &500);

    client.fund_payroll(&funder, &reference, &500);

    let funded: PayrollFunded = last_data(&env, &client.address, &PAYROLL_FUNDED_EVENT);
    assert_eq!(
        funded,
        PayrollFunded {
            from: funder,
            token: reference.clone(),
            amount: 500,
        }
    );
    assert_eq!(second_topic(&env, &client.address, &PAYROLL_FUNDED_EVENT), reference);
}

#[test]
fn test_halt_events() {
    let (env, client, owner, _, _) = setup();

    client.block_payments(&owner);
    assert!(last_event(&env, &client.address, &PAYMENTS_BLOCKED_EVENT).is_some());

    client.allow_payments(&owner);
    assert!(last_event(&env, &client.address, &PAYMENTS_ALLOWED_EVENT).is_some());
}

#[test]
fn test_failed_call_emits_nothing() {
    let (env, client, owner, _, _) = setup();
    let stranger = Address::generate(&env);
    let employee = Address::generate(&env);

    assert!(client.try_add_employee(&stranger, &employee, &1_000).is_err());
    assert!(last_event(&env, &client.address, &EMPLOYEE_ADDED_EVENT).is_none());

    client.add_employee(&owner, &employee, &1_000);
    assert!(last_event(&env, &client.address, &EMPLOYEE_ADDED_EVENT).is_some());
}
