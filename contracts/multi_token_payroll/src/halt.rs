use soroban_sdk::{Address, Env};

use crate::access;
use crate::errors::PayrollError;
use crate::events;
use crate::storage::{self, PaymentsState};

/// Owner commands accepted by the halt switch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HaltCommand {
    Block,
    Allow,
}

/// Transition function of the switch. Every command is valid from every
/// state; repeating a command leaves the state unchanged.
pub fn next_state(_current: PaymentsState, command: HaltCommand) -> PaymentsState {
    match command {
        HaltCommand::Block => PaymentsState::Blocked,
        HaltCommand::Allow => PaymentsState::Allowed,
    }
}

/// Applies `command` for the owner and emits the matching event, even when
/// the switch was already in the target state.
pub fn apply(
    env: &Env,
    caller: &Address,
    command: HaltCommand,
) -> Result<PaymentsState, PayrollError> {
    access::owner_config(env, caller)?;

    let state = next_state(storage::read_payments_state(env), command);
    storage::write_payments_state(env, state);

    match command {
        HaltCommand::Block => events::emit_payments_blocked(env),
        HaltCommand::Allow => events::emit_payments_allowed(env),
    }

    Ok(state)
}

pub fn is_blocked(env: &Env) -> bool {
    storage::read_payments_state(env) == PaymentsState::Blocked
}
