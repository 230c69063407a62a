//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const EMPLOYEE_ADDED_EVENT: Symbol = symbol_short!("emp_added");
pub const EMPLOYEE_SALARY_UPDATED_EVENT: Symbol = symbol_short!("emp_sal");
pub const EMPLOYEE_REMOVED_EVENT: Symbol = symbol_short!("emp_rmvd");
pub const TOKEN_ALLOWED_EVENT: Symbol = symbol_short!("tok_allow");
pub const SUPPORTED_TOKEN_ADDED_EVENT: Symbol = symbol_short!("tok_added");
pub const EXCHANGE_RATE_UPDATED_EVENT: Symbol = symbol_short!("rate_upd");
pub const ORACLE_UPDATED_EVENT: Symbol = symbol_short!("oracle");

/// Emergency halt engaged
pub const PAYMENTS_BLOCKED_EVENT: Symbol = symbol_short!("blocked");

/// Emergency halt released
pub const PAYMENTS_ALLOWED_EVENT: Symbol = symbol_short!("allowed");

/// Data carries the running allocation total, not the per-token percentage
pub const DISTRIBUTION_UPDATED_EVENT: Symbol = symbol_short!("alloc_upd");

pub const PAYMENT_RECEIVED_EVENT: Symbol = symbol_short!("paid");
pub const PAYROLL_FUNDED_EVENT: Symbol = symbol_short!("funded");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeAdded {
    pub employee: Address,
    pub yearly_salary: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeSalaryUpdated {
    pub employee: Address,
    pub old_salary: i128,
    pub new_salary: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRemoved {
    pub employee: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAllowed {
    pub employee: Address,
    pub token: Address,
    /// Caller-supplied rate, informational only.
    pub rate_snapshot: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupportedTokenAdded {
    pub token: Address,
    pub rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeRateUpdated {
    pub token: Address,
    pub old_rate: i128,
    pub new_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleUpdated {
    pub new_oracle: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentDistributionUpdated {
    pub employee: Address,
    pub token: Address,
    pub total_allocated: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentReceived {
    pub employee: Address,
    pub token: Address,
    /// Token units, after conversion.
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayrollFunded {
    pub from: Address,
    pub token: Address,
    pub amount: i128,
}

pub fn emit_employee_added(env: &Env, event: EmployeeAdded) {
    env.events()
        .publish((EMPLOYEE_ADDED_EVENT, event.employee.clone()), event);
}

pub fn emit_employee_salary_updated(env: &Env, event: EmployeeSalaryUpdated) {
    env.events()
        .publish((EMPLOYEE_SALARY_UPDATED_EVENT, event.employee.clone()), event);
}

pub fn emit_employee_removed(env: &Env, event: EmployeeRemoved) {
    env.events()
        .publish((EMPLOYEE_REMOVED_EVENT, event.employee.clone()), event);
}

pub fn emit_token_allowed(env: &Env, event: TokenAllowed) {
    env.events()
        .publish((TOKEN_ALLOWED_EVENT, event.employee.clone()), event);
}

pub fn emit_supported_token_added(env: &Env, event: SupportedTokenAdded) {
    env.events()
        .publish((SUPPORTED_TOKEN_ADDED_EVENT, event.token.clone()), event);
}

pub fn emit_exchange_rate_updated(env: &Env, event: ExchangeRateUpdated) {
    env.events()
        .publish((EXCHANGE_RATE_UPDATED_EVENT, event.token.clone()), event);
}

pub fn emit_oracle_updated(env: &Env, event: OracleUpdated) {
    env.events().publish((ORACLE_UPDATED_EVENT,), event);
}

pub fn emit_payments_blocked(env: &Env) {
    env.events().publish((PAYMENTS_BLOCKED_EVENT,), ());
}

pub fn emit_payments_allowed(env: &Env) {
    env.events().publish((PAYMENTS_ALLOWED_EVENT,), ());
}

pub fn emit_distribution_updated(env: &Env, event: PaymentDistributionUpdated) {
    env.events()
        .publish((DISTRIBUTION_UPDATED_EVENT, event.employee.clone()), event);
}

pub fn emit_payment_received(env: &Env, event: PaymentReceived) {
    env.events()
        .publish((PAYMENT_RECEIVED_EVENT, event.employee.clone()), event);
}

pub fn emit_payroll_funded(env: &Env, event: PayrollFunded) {
    env.events()
        .publish((PAYROLL_FUNDED_EVENT, event.token.clone()), event);
}
