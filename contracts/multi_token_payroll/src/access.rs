//! Role guards.
//!
//! Signatures are checked with `require_auth` at the entry point; the
//! functions here only match the authenticated caller against the stored
//! [`PayrollConfig`] or employee ledger and never write state.

use soroban_sdk::{Address, Env};

use crate::errors::PayrollError;
use crate::storage::{self, EmployeeRecord, PaymentsState, PayrollConfig};

pub fn require_owner(config: &PayrollConfig, caller: &Address) -> Result<(), PayrollError> {
    if *caller != config.owner {
        return Err(PayrollError::Unauthorized);
    }
    Ok(())
}

pub fn require_oracle(config: &PayrollConfig, caller: &Address) -> Result<(), PayrollError> {
    if *caller != config.oracle {
        return Err(PayrollError::Unauthorized);
    }
    Ok(())
}

/// Returns the caller's own record.
pub fn require_employee(env: &Env, caller: &Address) -> Result<EmployeeRecord, PayrollError> {
    storage::read_employee(env, caller).ok_or(PayrollError::UnknownEmployee)
}

pub fn require_not_halted(state: PaymentsState) -> Result<(), PayrollError> {
    match state {
        PaymentsState::Allowed => Ok(()),
        PaymentsState::Blocked => Err(PayrollError::PaymentsHalted),
    }
}

/// Loads the config and checks the caller is the owner.
pub fn owner_config(env: &Env, caller: &Address) -> Result<PayrollConfig, PayrollError> {
    let config = storage::read_config(env)?;
    require_owner(&config, caller)?;
    Ok(config)
}
