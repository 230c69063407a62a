use soroban_sdk::{contracttype, Address, Env, Map, Vec};

use crate::errors::PayrollError;

/// Ledgers are ~5s apart, so 17_280 ledgers is roughly one day.
const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_THRESHOLD: u32 = INSTANCE_BUMP - DAY_IN_LEDGERS;
const PERSISTENT_BUMP: u32 = 120 * DAY_IN_LEDGERS;
const PERSISTENT_THRESHOLD: u32 = PERSISTENT_BUMP - DAY_IN_LEDGERS;

/// Roles and the reference unit, fixed at construction except for `oracle`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayrollConfig {
    pub owner: Address,
    pub oracle: Address,
    pub reference_token: Address,
}

/// Emergency halt switch
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentsState {
    Allowed,
    Blocked,
}

/// Supported token and its rate against the reference unit
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenEntry {
    pub token: Address,
    /// Reference units per one unit of `token`. Always >= 1.
    pub exchange_rate: i128,
    pub added_at: u64,
    pub rate_updated_at: u64,
}

/// Employee record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRecord {
    pub address: Address,
    /// Reference units per year.
    pub yearly_salary: i128,
    /// Grant order, no duplicates.
    pub allowed_tokens: Vec<Address>,
    /// Token -> percentage points. Keys are a subset of `allowed_tokens`.
    pub allocations: Map<Address, u32>,
    pub last_payment_timestamp: u64,
    /// Base of the accrual window settled at `last_payment_timestamp`.
    pub accrual_base_timestamp: u64,
    /// Tokens already settled at `last_payment_timestamp`.
    pub tokens_paid_at_last_payment: Vec<Address>,
    /// Percentage points of the window settled at `last_payment_timestamp`.
    /// Never exceeds 100.
    pub percent_paid_at_last_payment: u32,
    /// Reference value of the tokens actually transferred, `amount * rate`
    /// at the time of each payday. Conversion remainders are not counted.
    pub total_reference_paid: i128,
    pub hired_at: u64,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// PayrollConfig (instance)
    Config,
    /// PaymentsState (instance)
    PaymentsState,
    /// u32 employee count (instance)
    EmployeeCount,
    /// Vec<Address> of current employees (persistent)
    Employees,
    /// EmployeeRecord by address (persistent)
    Employee(Address),
    /// Vec<Address> of supported tokens in registration order (persistent)
    SupportedTokens,
    /// TokenEntry by token address (persistent)
    SupportedToken(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_BUMP);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_BUMP);
}

// Config

/// Without a stored config no role can be matched, so absence reads as
/// `Unauthorized`.
pub fn read_config(env: &Env) -> Result<PayrollConfig, PayrollError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PayrollError::Unauthorized)
}

pub fn write_config(env: &Env, config: &PayrollConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// Halt switch

pub fn read_payments_state(env: &Env) -> PaymentsState {
    env.storage()
        .instance()
        .get(&DataKey::PaymentsState)
        .unwrap_or(PaymentsState::Allowed)
}

pub fn write_payments_state(env: &Env, state: PaymentsState) {
    env.storage().instance().set(&DataKey::PaymentsState, &state);
    bump_instance(env);
}

// Employees

pub fn read_employee(env: &Env, employee: &Address) -> Option<EmployeeRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Employee(employee.clone()))
}

pub fn has_employee(env: &Env, employee: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Employee(employee.clone()))
}

pub fn write_employee(env: &Env, record: &EmployeeRecord) {
    let key = DataKey::Employee(record.address.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn remove_employee_record(env: &Env, employee: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Employee(employee.clone()));
}

pub fn read_employee_ids(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Employees)
        .unwrap_or(Vec::new(env))
}

pub fn write_employee_ids(env: &Env, ids: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Employees, ids);
    bump_persistent(env, &DataKey::Employees);
}

pub fn read_employee_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::EmployeeCount)
        .unwrap_or(0)
}

pub fn write_employee_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::EmployeeCount, &count);
    bump_instance(env);
}

// Token registry

pub fn read_token(env: &Env, token: &Address) -> Option<TokenEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::SupportedToken(token.clone()))
}

pub fn has_token(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::SupportedToken(token.clone()))
}

pub fn write_token(env: &Env, entry: &TokenEntry) {
    let key = DataKey::SupportedToken(entry.token.clone());
    env.storage().persistent().set(&key, entry);
    bump_persistent(env, &key);
}

pub fn read_token_ids(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::SupportedTokens)
        .unwrap_or(Vec::new(env))
}

pub fn write_token_ids(env: &Env, ids: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::SupportedTokens, ids);
    bump_persistent(env, &DataKey::SupportedTokens);
}
