use soroban_sdk::{log, token, Address, Env, Vec};

use crate::access;
use crate::employees;
use crate::errors::PayrollError;
use crate::events::{
    self, OracleUpdated, PaymentDistributionUpdated, PaymentReceived, PayrollFunded,
};
use crate::storage::{self, EmployeeRecord};
use crate::tokens;

/// Length of the pay period used for proration: 30 days.
pub const SECONDS_PER_MONTH: u64 = 30 * 24 * 60 * 60;

/// Days per pay period, for runway reporting.
pub const DAYS_PER_MONTH: i128 = 30;

pub const FULL_ALLOCATION: u32 = 100;

/// Amounts computed for one payday call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disbursement {
    /// Reference units owed for this token.
    pub reference_amount: i128,
    /// `reference_amount` converted at the current rate.
    pub token_amount: i128,
    /// Reference value of `token_amount`, without the conversion remainder.
    pub paid_reference: i128,
}

/// Accrual window and percentage still owed for one payday call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub base_timestamp: u64,
    pub percentage: u32,
}

/// Sets or replaces the caller's allocation for `token`. A percentage of 0
/// drops the entry.
///
/// Returns the new running total across all of the caller's tokens.
pub fn determine_allocation(
    env: &Env,
    employee: &Address,
    token: &Address,
    percentage: u32,
) -> Result<u32, PayrollError> {
    let mut record = access::require_employee(env, employee)?;
    access::require_not_halted(storage::read_payments_state(env))?;

    if !record.allowed_tokens.contains(token) {
        return Err(PayrollError::TokenNotAllowed);
    }
    if percentage > FULL_ALLOCATION {
        return Err(PayrollError::InvalidPercentage);
    }

    let previous = record.allocations.get(token.clone()).unwrap_or(0);
    let total = employees::allocated_total(&record) - previous + percentage;
    if total > FULL_ALLOCATION {
        return Err(PayrollError::InvalidPercentage);
    }

    if percentage == 0 {
        record.allocations.remove(token.clone());
    } else {
        record.allocations.set(token.clone(), percentage);
    }
    storage::write_employee(env, &record);

    events::emit_distribution_updated(
        env,
        PaymentDistributionUpdated {
            employee: employee.clone(),
            token: token.clone(),
            total_allocated: total,
        },
    );

    Ok(total)
}

/// Window and share owed for a payday of `token` at `now`.
///
/// Every employee has one payday clock. A claim at a later instant opens
/// the window `[last_payment, now]`. Further claims in that same instant
/// share the window, but together never settle more than 100 percent of it,
/// whatever the allocations are changed to in between. A token already
/// settled in the instant is owed nothing.
pub fn settlement(
    record: &EmployeeRecord,
    token: &Address,
    percentage: u32,
    now: u64,
) -> Settlement {
    if now > record.last_payment_timestamp {
        return Settlement {
            base_timestamp: record.last_payment_timestamp,
            percentage,
        };
    }

    let remaining = FULL_ALLOCATION.saturating_sub(record.percent_paid_at_last_payment);
    let percentage = if record.tokens_paid_at_last_payment.contains(token) {
        0
    } else {
        percentage.min(remaining)
    };
    Settlement {
        base_timestamp: record.accrual_base_timestamp,
        percentage,
    }
}

/// Pure payday arithmetic, floored at every step:
/// monthly salary, prorated accrual, allocation share, token conversion.
pub fn compute_disbursement(
    yearly_salary: i128,
    elapsed_seconds: u64,
    percentage: u32,
    rate: i128,
) -> Result<Disbursement, PayrollError> {
    let monthly = yearly_salary / 12;
    let accrued = monthly
        .checked_mul(i128::from(elapsed_seconds))
        .ok_or(PayrollError::Overflow)?
        / i128::from(SECONDS_PER_MONTH);
    let reference_amount = accrued
        .checked_mul(i128::from(percentage))
        .ok_or(PayrollError::Overflow)?
        / i128::from(FULL_ALLOCATION);
    let token_amount = tokens::convert(reference_amount, rate)?;
    let paid_reference = tokens::to_reference(token_amount, rate)?;

    Ok(Disbursement {
        reference_amount,
        token_amount,
        paid_reference,
    })
}

/// Pays the caller's accrued share in `token`.
///
/// Bookkeeping is committed before the token transfer; if the transfer
/// fails the returned error discards those writes with the rest of the call.
pub fn payday(env: &Env, employee: &Address, token: &Address) -> Result<i128, PayrollError> {
    let mut record = access::require_employee(env, employee)?;
    access::require_not_halted(storage::read_payments_state(env))?;

    let percentage = record
        .allocations
        .get(token.clone())
        .ok_or(PayrollError::TokenNotAllowed)?;
    if employees::allocated_total(&record) != FULL_ALLOCATION {
        return Err(PayrollError::AllocationIncomplete);
    }
    let rate = tokens::exchange_rate(env, token)?;

    let now = env.ledger().timestamp();
    let owed = settlement(&record, token, percentage, now);
    let payout = compute_disbursement(
        record.yearly_salary,
        now.saturating_sub(owed.base_timestamp),
        owed.percentage,
        rate,
    )?;

    // Effects
    if now > record.last_payment_timestamp {
        record.accrual_base_timestamp = record.last_payment_timestamp;
        record.last_payment_timestamp = now;
        record.tokens_paid_at_last_payment = Vec::new(env);
        record.percent_paid_at_last_payment = 0;
    }
    if !record.tokens_paid_at_last_payment.contains(token) {
        record.tokens_paid_at_last_payment.push_back(token.clone());
    }
    record.percent_paid_at_last_payment += owed.percentage;
    record.total_reference_paid = record
        .total_reference_paid
        .checked_add(payout.paid_reference)
        .ok_or(PayrollError::Overflow)?;
    storage::write_employee(env, &record);

    // Interaction
    if payout.token_amount > 0 {
        transfer_out(env, token, employee, payout.token_amount)?;
    }

    events::emit_payment_received(
        env,
        PaymentReceived {
            employee: employee.clone(),
            token: token.clone(),
            amount: payout.token_amount,
        },
    );

    Ok(payout.token_amount)
}

fn transfer_out(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), PayrollError> {
    let contract = env.current_contract_address();
    let client = token::Client::new(env, token);

    if client.balance(&contract) < amount {
        log!(env, "payday: balance below {} for {}", amount, token.clone());
        return Err(PayrollError::InsufficientFunds);
    }

    match client.try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "payday: transfer of {} rejected by {}", amount, token.clone());
            Err(PayrollError::TransferRejected)
        }
    }
}

/// Σ floor(yearly_i / 12) over current employees, in reference units per month.
pub fn burnrate(env: &Env) -> Result<i128, PayrollError> {
    let mut total: i128 = 0;
    for id in storage::read_employee_ids(env).iter() {
        if let Some(record) = storage::read_employee(env, &id) {
            total = total
                .checked_add(employees::monthly_salary(&record))
                .ok_or(PayrollError::Overflow)?;
        }
    }
    Ok(total)
}

pub fn calculate_payroll_burnrate(env: &Env, caller: &Address) -> Result<i128, PayrollError> {
    access::owner_config(env, caller)?;
    burnrate(env)
}

/// Whole pay periods the contract's `token` balance covers at the current
/// burn rate: floor(balance * rate / burnrate).
pub fn calculate_payroll_runway(
    env: &Env,
    caller: &Address,
    token: &Address,
) -> Result<i128, PayrollError> {
    access::owner_config(env, caller)?;
    let (funds, burn) = runway_inputs(env, token)?;
    Ok(funds / burn)
}

/// Same as [`calculate_payroll_runway`], counted in days of a 30-day period.
pub fn calculate_payroll_runway_days(
    env: &Env,
    caller: &Address,
    token: &Address,
) -> Result<i128, PayrollError> {
    access::owner_config(env, caller)?;
    let (funds, burn) = runway_inputs(env, token)?;
    let scaled = funds
        .checked_mul(DAYS_PER_MONTH)
        .ok_or(PayrollError::Overflow)?;
    Ok(scaled / burn)
}

/// (balance in reference units, non-zero burn rate)
fn runway_inputs(env: &Env, token: &Address) -> Result<(i128, i128), PayrollError> {
    let rate = tokens::exchange_rate(env, token)?;
    let burn = burnrate(env)?;
    if burn == 0 {
        return Err(PayrollError::ZeroBurnRate);
    }
    let funds = tokens::to_reference(balance(env, token), rate)?;
    Ok((funds, burn))
}

pub fn balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

pub fn set_oracle(env: &Env, caller: &Address, new_oracle: &Address) -> Result<(), PayrollError> {
    let mut config = access::owner_config(env, caller)?;
    config.oracle = new_oracle.clone();
    storage::write_config(env, &config);

    events::emit_oracle_updated(
        env,
        OracleUpdated {
            new_oracle: new_oracle.clone(),
        },
    );

    Ok(())
}

/// Moves `amount` of a supported token from `from` into the payroll.
pub fn fund_payroll(
    env: &Env,
    from: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), PayrollError> {
    if amount <= 0 {
        return Err(PayrollError::InvalidAmount);
    }
    tokens::get_token(env, token)?;

    let client = token::Client::new(env, token);
    if client.balance(from) < amount {
        return Err(PayrollError::InsufficientFunds);
    }
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(PayrollError::TransferRejected),
    }

    events::emit_payroll_funded(
        env,
        PayrollFunded {
            from: from.clone(),
            token: token.clone(),
            amount,
        },
    );

    Ok(())
}
