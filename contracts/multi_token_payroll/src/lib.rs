#![no_std]

pub mod access;
pub mod employees;
pub mod errors;
pub mod events;
pub mod halt;
pub mod payroll;
pub mod storage;
pub mod tokens;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

pub use errors::PayrollError;
pub use storage::{EmployeeRecord, PaymentsState, PayrollConfig, TokenEntry};

use halt::HaltCommand;

/// Payroll ledger paying reference-unit salaries in a per-employee mix of
/// tokens, at rates maintained by an oracle.
///
/// # Roles
///
/// - owner: fixed at construction; manages employees, tokens, the oracle
///   and the emergency halt switch
/// - oracle: updates exchange rates
/// - employee: chooses allocations and claims pay
#[contract]
pub struct MultiTokenPayroll;

#[contractimpl]
impl MultiTokenPayroll {
    /// Stores the roles and registers the reference token.
    ///
    /// # Arguments
    /// * `owner` - Administrative role, immutable
    /// * `oracle` - Initial rate oracle
    /// * `reference_token` - Token salaries are denominated in
    /// * `reference_rate` - Its rate, conventionally 1
    pub fn __constructor(
        env: Env,
        owner: Address,
        oracle: Address,
        reference_token: Address,
        reference_rate: i128,
    ) {
        storage::write_config(
            &env,
            &PayrollConfig {
                owner,
                oracle,
                reference_token: reference_token.clone(),
            },
        );
        storage::write_payments_state(&env, PaymentsState::Allowed);
        storage::write_employee_count(&env, 0);

        if let Err(err) = tokens::register(&env, &reference_token, reference_rate) {
            panic_with_error!(&env, err);
        }
    }

    //-------------------------------------------------------------------------
    // Roles
    //-------------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, PayrollError> {
        Ok(storage::read_config(&env)?.owner)
    }

    pub fn oracle(env: Env) -> Result<Address, PayrollError> {
        Ok(storage::read_config(&env)?.oracle)
    }

    pub fn reference_token(env: Env) -> Result<Address, PayrollError> {
        Ok(storage::read_config(&env)?.reference_token)
    }

    /// Replaces the oracle.
    ///
    /// # Access Control
    /// Owner only
    ///
    /// # Events
    /// `oracle`
    pub fn set_oracle(
        env: Env,
        caller: Address,
        new_oracle: Address,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        payroll::set_oracle(&env, &caller, &new_oracle)
    }

    //-------------------------------------------------------------------------
    // Token registry
    //-------------------------------------------------------------------------

    /// Registers a payout token with its initial rate (reference units per
    /// token unit).
    ///
    /// # Access Control
    /// Owner only
    pub fn add_supported_token(
        env: Env,
        caller: Address,
        token: Address,
        rate: i128,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        tokens::add_supported_token(&env, &caller, &token, rate)
    }

    /// # Access Control
    /// Oracle only
    pub fn set_exchange_rate(
        env: Env,
        caller: Address,
        token: Address,
        rate: i128,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        tokens::set_exchange_rate(&env, &caller, &token, rate)
    }

    pub fn get_exchange_rate(env: Env, token: Address) -> Result<i128, PayrollError> {
        tokens::exchange_rate(&env, &token)
    }

    pub fn get_supported_tokens(env: Env) -> Vec<Address> {
        tokens::supported_tokens(&env)
    }

    pub fn is_supported_token(env: Env, token: Address) -> bool {
        storage::has_token(&env, &token)
    }

    //-------------------------------------------------------------------------
    // Employee ledger
    //-------------------------------------------------------------------------

    /// # Access Control
    /// Owner only
    ///
    /// # Events
    /// `emp_added`
    pub fn add_employee(
        env: Env,
        caller: Address,
        employee: Address,
        yearly_salary: i128,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        employees::add_employee(&env, &caller, &employee, yearly_salary)
    }

    /// # Access Control
    /// Owner only
    ///
    /// # Events
    /// `emp_sal` with the old and new salary
    pub fn set_employee_salary(
        env: Env,
        caller: Address,
        employee: Address,
        new_salary: i128,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        employees::set_employee_salary(&env, &caller, &employee, new_salary)
    }

    /// Grants a supported token to an employee. `rate_snapshot` is echoed
    /// in the event and otherwise ignored.
    ///
    /// # Access Control
    /// Owner only
    pub fn allow_token(
        env: Env,
        caller: Address,
        employee: Address,
        token: Address,
        rate_snapshot: i128,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        employees::allow_token(&env, &caller, &employee, &token, rate_snapshot)
    }

    /// # Access Control
    /// Owner only. Allowed while payments are blocked.
    pub fn remove_employee(
        env: Env,
        caller: Address,
        employee: Address,
    ) -> Result<(), PayrollError> {
        caller.require_auth();
        employees::remove_employee(&env, &caller, &employee)
    }

    pub fn get_employee(env: Env, employee: Address) -> Result<EmployeeRecord, PayrollError> {
        employees::get_employee(&env, &employee)
    }

    pub fn get_employee_count(env: Env) -> u32 {
        employees::employee_count(&env)
    }

    pub fn get_employees(env: Env) -> Vec<Address> {
        employees::employees(&env)
    }

    /// Percentage allocated to `token`, 0 when none.
    pub fn get_allocation(
        env: Env,
        employee: Address,
        token: Address,
    ) -> Result<u32, PayrollError> {
        let record = employees::get_employee(&env, &employee)?;
        Ok(record.allocations.get(token).unwrap_or(0))
    }

    //-------------------------------------------------------------------------
    // Allocation and disbursement
    //-------------------------------------------------------------------------

    /// Sets the caller's share of pay in `token`.
    ///
    /// # Returns
    /// Running allocation total across all of the caller's tokens
    ///
    /// # Access Control
    /// The employee themself, while payments are allowed
    pub fn determine_allocation(
        env: Env,
        employee: Address,
        token: Address,
        percentage: u32,
    ) -> Result<u32, PayrollError> {
        employee.require_auth();
        payroll::determine_allocation(&env, &employee, &token, percentage)
    }

    /// Pays the caller's accrued share in `token`.
    ///
    /// # Returns
    /// Token units transferred
    ///
    /// # Access Control
    /// The employee themself, while payments are allowed
    pub fn payday(env: Env, employee: Address, token: Address) -> Result<i128, PayrollError> {
        employee.require_auth();
        payroll::payday(&env, &employee, &token)
    }

    /// Deposits a supported token into the payroll.
    pub fn fund_payroll(
        env: Env,
        from: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), PayrollError> {
        from.require_auth();
        payroll::fund_payroll(&env, &from, &token, amount)
    }

    pub fn get_payroll_balance(env: Env, token: Address) -> Result<i128, PayrollError> {
        tokens::get_token(&env, &token)?;
        Ok(payroll::balance(&env, &token))
    }

    //-------------------------------------------------------------------------
    // Reporting
    //-------------------------------------------------------------------------

    /// Monthly salary obligation in reference units.
    ///
    /// # Access Control
    /// Owner only
    pub fn calculate_payroll_burnrate(env: Env, caller: Address) -> Result<i128, PayrollError> {
        caller.require_auth();
        payroll::calculate_payroll_burnrate(&env, &caller)
    }

    /// Whole 30-day pay periods the `token` balance covers.
    ///
    /// # Access Control
    /// Owner only
    pub fn calculate_payroll_runway(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<i128, PayrollError> {
        caller.require_auth();
        payroll::calculate_payroll_runway(&env, &caller, &token)
    }

    /// # Access Control
    /// Owner only
    pub fn calculate_payroll_runway_days(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<i128, PayrollError> {
        caller.require_auth();
        payroll::calculate_payroll_runway_days(&env, &caller, &token)
    }

    //-------------------------------------------------------------------------
    // Emergency halt
    //-------------------------------------------------------------------------

    /// # Access Control
    /// Owner only
    ///
    /// # Events
    /// `blocked`, also when already blocked
    pub fn block_payments(env: Env, caller: Address) -> Result<(), PayrollError> {
        caller.require_auth();
        halt::apply(&env, &caller, HaltCommand::Block)?;
        Ok(())
    }

    /// # Access Control
    /// Owner only
    ///
    /// # Events
    /// `allowed`, also when already allowed
    pub fn allow_payments(env: Env, caller: Address) -> Result<(), PayrollError> {
        caller.require_auth();
        halt::apply(&env, &caller, HaltCommand::Allow)?;
        Ok(())
    }

    pub fn payments_state(env: Env) -> PaymentsState {
        storage::read_payments_state(&env)
    }

    pub fn is_payments_blocked(env: Env) -> bool {
        halt::is_blocked(&env)
    }
}
