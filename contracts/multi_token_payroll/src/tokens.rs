use soroban_sdk::{Address, Env, Vec};

use crate::access;
use crate::errors::PayrollError;
use crate::events::{self, ExchangeRateUpdated, SupportedTokenAdded};
use crate::storage::{self, TokenEntry};

//-----------------------------------------------------------------------------
// Token Registry / Exchange Rate Table
//-----------------------------------------------------------------------------

fn validate_rate(rate: i128) -> Result<(), PayrollError> {
    if rate < 1 {
        return Err(PayrollError::InvalidRate);
    }
    Ok(())
}

/// Registers `token` without any role check. Used by the constructor for
/// the reference token and by [`add_supported_token`].
pub(crate) fn register(env: &Env, token: &Address, rate: i128) -> Result<TokenEntry, PayrollError> {
    validate_rate(rate)?;
    if storage::has_token(env, token) {
        return Err(PayrollError::DuplicateToken);
    }

    let now = env.ledger().timestamp();
    let entry = TokenEntry {
        token: token.clone(),
        exchange_rate: rate,
        added_at: now,
        rate_updated_at: now,
    };
    storage::write_token(env, &entry);

    let mut ids = storage::read_token_ids(env);
    ids.push_back(token.clone());
    storage::write_token_ids(env, &ids);

    events::emit_supported_token_added(
        env,
        SupportedTokenAdded {
            token: token.clone(),
            rate,
        },
    );

    Ok(entry)
}

/// Owner-only registration of a new payout token.
pub fn add_supported_token(
    env: &Env,
    caller: &Address,
    token: &Address,
    rate: i128,
) -> Result<(), PayrollError> {
    access::owner_config(env, caller)?;
    register(env, token, rate)?;
    Ok(())
}

/// Oracle-only rate update.
pub fn set_exchange_rate(
    env: &Env,
    caller: &Address,
    token: &Address,
    rate: i128,
) -> Result<(), PayrollError> {
    let config = storage::read_config(env)?;
    access::require_oracle(&config, caller)?;

    let mut entry = get_token(env, token)?;
    validate_rate(rate)?;

    let old_rate = entry.exchange_rate;
    entry.exchange_rate = rate;
    entry.rate_updated_at = env.ledger().timestamp();
    storage::write_token(env, &entry);

    events::emit_exchange_rate_updated(
        env,
        ExchangeRateUpdated {
            token: token.clone(),
            old_rate,
            new_rate: rate,
        },
    );

    Ok(())
}

pub fn get_token(env: &Env, token: &Address) -> Result<TokenEntry, PayrollError> {
    storage::read_token(env, token).ok_or(PayrollError::UnknownToken)
}

pub fn exchange_rate(env: &Env, token: &Address) -> Result<i128, PayrollError> {
    Ok(get_token(env, token)?.exchange_rate)
}

pub fn supported_tokens(env: &Env) -> Vec<Address> {
    storage::read_token_ids(env)
}

/// Reference units to token units. Floor division: the remainder is lost.
pub fn convert(amount_reference: i128, rate: i128) -> Result<i128, PayrollError> {
    amount_reference
        .checked_div(rate)
        .ok_or(PayrollError::InvalidRate)
}

/// Token units to reference units.
pub fn to_reference(amount_token: i128, rate: i128) -> Result<i128, PayrollError> {
    amount_token.checked_mul(rate).ok_or(PayrollError::Overflow)
}
