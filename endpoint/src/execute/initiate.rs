//! Initiate-path handlers.
//!
//! Take custody of (or burn) the caller's tokens on this domain, then hand
//! the encoded finalize call to the gateway. Initiation returns as soon as
//! the message is emitted; nothing here waits for the far side.

use common::GatewayExecuteMsg;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, DepsMut, Env, MessageInfo, QuerierWrapper, Response,
    StdError, StdResult, Uint128, WasmMsg,
};

use crate::adapter::{EscrowAdapter, MintBurnAdapter};
use crate::error::ContractError;
use crate::execute::join_for_event;
use crate::message::{describe_from_receiver_perspective, BridgeMessage};
use crate::state::{BridgeRole, CONFIG, DEPOSITS};

/// Bridge a single token id to the caller's own address on the other domain.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    local_token: String,
    remote_token: String,
    token_id: u64,
    amount: Uint128,
    resource_limit: u64,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let to = info.sender.to_string();
    initiate(
        deps,
        env,
        info,
        local_token,
        remote_token,
        to,
        vec![token_id],
        vec![amount],
        resource_limit,
        extra_data,
        false,
    )
}

/// Bridge a single token id to an explicit recipient on the other domain.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_to(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    local_token: String,
    remote_token: String,
    to: String,
    token_id: u64,
    amount: Uint128,
    resource_limit: u64,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    initiate(
        deps,
        env,
        info,
        local_token,
        remote_token,
        to,
        vec![token_id],
        vec![amount],
        resource_limit,
        extra_data,
        false,
    )
}

/// Bridge several token ids to the caller's own address on the other domain.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_batch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    local_token: String,
    remote_token: String,
    token_ids: Vec<u64>,
    amounts: Vec<Uint128>,
    resource_limit: u64,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let to = info.sender.to_string();
    initiate(
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
        true,
    )
}

/// Bridge several token ids to an explicit recipient on the other domain.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_batch_to(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    local_token: String,
    remote_token: String,
    to: String,
    token_ids: Vec<u64>,
    amounts: Vec<Uint128>,
    resource_limit: u64,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    initiate(
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
        true,
    )
}

/// Shared initiate path for all four entry points.
#[allow(clippy::too_many_arguments)]
fn initiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    local_token: String,
    remote_token: String,
    to: String,
    token_ids: Vec<u64>,
    amounts: Vec<Uint128>,
    resource_limit: u64,
    extra_data: Binary,
    batch: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure_externally_owned(&deps.querier, &info.sender)?;

    if remote_token.is_empty() {
        return Err(ContractError::ZeroRemoteToken);
    }

    // An unusable local token is not pre-validated at the protocol level; it
    // surfaces from address validation or the token call itself.
    let local_token = deps.api.addr_validate(&local_token)?;

    // The adapter call validates the id/amount pairing before any ledger
    // write happens.
    let custody_msg: CosmosMsg = match config.role {
        BridgeRole::Escrow => {
            let adapter = EscrowAdapter {
                token: &local_token,
            };
            let msg = adapter.take(&env.contract.address, &info.sender, &token_ids, &amounts)?;
            for (token_id, amount) in token_ids.iter().zip(&amounts) {
                DEPOSITS.update(
                    deps.storage,
                    (&local_token, remote_token.as_str(), *token_id),
                    |held| -> StdResult<_> {
                        held.unwrap_or_default()
                            .checked_add(*amount)
                            .map_err(StdError::overflow)
                    },
                )?;
            }
            msg
        }
        BridgeRole::MintBurn => {
            let adapter = MintBurnAdapter {
                token: &local_token,
            };
            adapter.burn(&info.sender, &token_ids, &amounts)?
        }
    };

    // The receiver describes the same token pair from its own vantage point.
    let (receiver_local, receiver_remote) =
        describe_from_receiver_perspective(&local_token, &remote_token);
    let message = BridgeMessage {
        local_token: receiver_local,
        remote_token: receiver_remote,
        from: info.sender.to_string(),
        to: to.clone(),
        token_ids: token_ids.clone(),
        amounts: amounts.clone(),
        extra_data: extra_data.clone(),
    };
    let gateway_msg: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.gateway.to_string(),
        msg: to_json_binary(&GatewayExecuteMsg::Send {
            target: config.remote_endpoint,
            payload: message.encode()?,
            resource_limit,
        })?,
        funds: vec![],
    }
    .into();

    let action = if batch {
        "batch_bridge_initiated"
    } else {
        "bridge_initiated"
    };
    Ok(Response::new()
        .add_message(custody_msg)
        .add_message(gateway_msg)
        .add_attribute("action", action)
        .add_attribute("local_token", local_token)
        .add_attribute("remote_token", remote_token)
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("token_ids", join_for_event(&token_ids))
        .add_attribute("amounts", join_for_event(&amounts))
        .add_attribute("extra_data", extra_data.to_base64()))
}

/// Reject callers with executable code attached. The contract-info lookup
/// succeeds only for addresses that host code.
fn ensure_externally_owned(
    querier: &QuerierWrapper,
    caller: &Addr,
) -> Result<(), ContractError> {
    match querier.query_wasm_contract_info(caller) {
        Ok(_) => Err(ContractError::CallerNotExternallyOwned),
        Err(_) => Ok(()),
    }
}
