use soroban_sdk::{Address, Env, Map, Vec};

use crate::access;
use crate::errors::PayrollError;
use crate::events::{
    self, EmployeeAdded, EmployeeRemoved, EmployeeSalaryUpdated, TokenAllowed,
};
use crate::storage::{self, EmployeeRecord};
use crate::tokens;

fn validate_salary(salary: i128) -> Result<(), PayrollError> {
    if salary < 0 {
        return Err(PayrollError::InvalidSalary);
    }
    Ok(())
}

/// Adds an employee with zero accrual
///
/// # Access Control
/// Owner only
pub fn add_employee(
    env: &Env,
    caller: &Address,
    employee: &Address,
    yearly_salary: i128,
) -> Result<(), PayrollError> {
    access::owner_config(env, caller)?;
    validate_salary(yearly_salary)?;
    if storage::has_employee(env, employee) {
        return Err(PayrollError::DuplicateEmployee);
    }

    let now = env.ledger().timestamp();
    let record = EmployeeRecord {
        address: employee.clone(),
        yearly_salary,
        allowed_tokens: Vec::new(env),
        allocations: Map::new(env),
        last_payment_timestamp: now,
        accrual_base_timestamp: now,
        tokens_paid_at_last_payment: Vec::new(env),
        percent_paid_at_last_payment: 0,
        total_reference_paid: 0,
        hired_at: now,
    };
    storage::write_employee(env, &record);

    let mut ids = storage::read_employee_ids(env);
    ids.push_back(employee.clone());
    storage::write_employee_ids(env, &ids);

    let count = storage::read_employee_count(env)
        .checked_add(1)
        .ok_or(PayrollError::Overflow)?;
    storage::write_employee_count(env, count);

    events::emit_employee_added(
        env,
        EmployeeAdded {
            employee: employee.clone(),
            yearly_salary,
        },
    );

    Ok(())
}

/// Replaces the yearly salary. Accrual bookkeeping is left as is.
pub fn set_employee_salary(
    env: &Env,
    caller: &Address,
    employee: &Address,
    new_salary: i128,
) -> Result<(), PayrollError> {
    access::owner_config(env, caller)?;
    validate_salary(new_salary)?;

    let mut record = get_employee(env, employee)?;
    let old_salary = record.yearly_salary;
    record.yearly_salary = new_salary;
    storage::write_employee(env, &record);

    events::emit_employee_salary_updated(
        env,
        EmployeeSalaryUpdated {
            employee: employee.clone(),
            old_salary,
            new_salary,
        },
    );

    Ok(())
}

/// Grants `token` to the employee. Granting an already allowed token is a
/// no-op on state but still emits `TokenAllowed`.
///
/// `rate_snapshot` is only echoed in the event; the registry rate is owned
/// by the oracle.
pub fn allow_token(
    env: &Env,
    caller: &Address,
    employee: &Address,
    token: &Address,
    rate_snapshot: i128,
) -> Result<(), PayrollError> {
    access::owner_config(env, caller)?;

    let mut record = get_employee(env, employee)?;
    tokens::get_token(env, token)?;

    if !record.allowed_tokens.contains(token) {
        record.allowed_tokens.push_back(token.clone());
        storage::write_employee(env, &record);
    }

    events::emit_token_allowed(
        env,
        TokenAllowed {
            employee: employee.clone(),
            token: token.clone(),
            rate_snapshot,
        },
    );

    Ok(())
}

/// Erases the employee record entirely. Not gated by the halt switch.
pub fn remove_employee(
    env: &Env,
    caller: &Address,
    employee: &Address,
) -> Result<(), PayrollError> {
    access::owner_config(env, caller)?;
    if !storage::has_employee(env, employee) {
        return Err(PayrollError::UnknownEmployee);
    }

    storage::remove_employee_record(env, employee);

    let mut ids = storage::read_employee_ids(env);
    if let Some(index) = ids.first_index_of(employee) {
        ids.remove(index);
    }
    storage::write_employee_ids(env, &ids);

    let count = storage::read_employee_count(env).saturating_sub(1);
    storage::write_employee_count(env, count);

    events::emit_employee_removed(
        env,
        EmployeeRemoved {
            employee: employee.clone(),
        },
    );

    Ok(())
}

pub fn get_employee(env: &Env, employee: &Address) -> Result<EmployeeRecord, PayrollError> {
    storage::read_employee(env, employee).ok_or(PayrollError::UnknownEmployee)
}

pub fn employee_count(env: &Env) -> u32 {
    storage::read_employee_count(env)
}

pub fn employees(env: &Env) -> Vec<Address> {
    storage::read_employee_ids(env)
}

/// Sum of the allocation percentages.
pub fn allocated_total(record: &EmployeeRecord) -> u32 {
    record.allocations.values().iter().sum()
}

/// `floor(yearly / 12)`, the employee's monthly reference-unit salary.
pub fn monthly_salary(record: &EmployeeRecord) -> i128 {
    record.yearly_salary / 12
}
