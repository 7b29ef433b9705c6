//! Bridge endpoint contract - entry points.
//!
//! Dispatch is split into:
//! - `execute/initiate` - the four Bridge* handlers
//! - `execute/finalize` - the gateway Receive handler
//! - `query` - query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_bridge, execute_bridge_batch, execute_bridge_batch_to, execute_bridge_to,
    execute_receive,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_deposit, query_deposits};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let gateway = deps.api.addr_validate(&msg.gateway)?;
    if msg.remote_endpoint.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "remote_endpoint must not be empty".to_string(),
        });
    }

    let config = Config {
        gateway,
        remote_endpoint: msg.remote_endpoint,
        role: msg.role,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("gateway", config.gateway)
        .add_attribute("remote_endpoint", config.remote_endpoint)
        .add_attribute(
            "role",
            match config.role {
                crate::state::BridgeRole::Escrow => "escrow",
                crate::state::BridgeRole::MintBurn => "mint_burn",
            },
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Bridge {
            local_token,
            remote_token,
            token_id,
            amount,
            resource_limit,
            extra_data,
        } => execute_bridge(
            deps,
            env,
            info,
            local_token,
            remote_token,
            token_id,
            amount,
            resource_limit,
            extra_data,
        ),
        ExecuteMsg::BridgeTo {
            local_token,
            remote_token,
            to,
            token_id,
            amount,
            resource_limit,
            extra_data,
        } => execute_bridge_to(
            deps,
            env,
            info,
            local_token,
            remote_token,
            to,
            token_id,
            amount,
            resource_limit,
            extra_data,
        ),
        ExecuteMsg::BridgeBatch {
            local_token,
            remote_token,
            token_ids,
            amounts,
            resource_limit,
            extra_data,
        } => execute_bridge_batch(
            deps,
            env,
            info,
            local_token,
            remote_token,
            token_ids,
            amounts,
            resource_limit,
            extra_data,
        ),
        ExecuteMsg::BridgeBatchTo {
            local_token,
            remote_token,
            to,
            token_ids,
            amounts,
            resource_limit,
            extra_data,
        } => execute_bridge_batch_to(
            deps,
            env,
            info,
            local_token,
            remote_token,
            to,
            token_ids,
            amounts,
            resource_limit,
            extra_data,
        ),
        ExecuteMsg::Receive(dispatch) => execute_receive(deps, env, info, dispatch),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Deposit {
            local_token,
            remote_token,
            token_id,
        } => to_json_binary(&query_deposit(deps, local_token, remote_token, token_id)?),
        QueryMsg::Deposits { start_after, limit } => {
            to_json_binary(&query_deposits(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
