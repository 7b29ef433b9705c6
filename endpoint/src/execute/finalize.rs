//! Finalize-path handler.
//!
//! Invoked by the gateway's inbound dispatch, any elapsed time after the
//! paired endpoint committed the matching initiate. Escrow role releases
//! custody against the deposit ledger; mint/burn role mints behind the
//! compliance gate. The whole call is atomic: a failure on any id in a batch
//! leaves every ledger entry and balance as it was.

use common::GatewayDispatchMsg;
use cosmwasm_std::{CosmosMsg, DepsMut, Env, MessageInfo, Response};

use crate::adapter::{EscrowAdapter, MintBurnAdapter};
use crate::error::ContractError;
use crate::execute::join_for_event;
use crate::gate::assert_representation_capability;
use crate::message::BridgeMessage;
use crate::state::{BridgeRole, CONFIG, DEPOSITS};

/// Handle a gateway dispatch carrying an encoded finalize call.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dispatch: GatewayDispatchMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Sole authorization mechanism: the dispatch must arrive through the
    // configured gateway, and the gateway-authenticated far-side sender must
    // be the paired endpoint.
    if info.sender != config.gateway {
        return Err(ContractError::UnauthorizedFinalizer);
    }
    if dispatch.origin_sender != config.remote_endpoint {
        return Err(ContractError::UnauthorizedFinalizer);
    }

    let message = BridgeMessage::decode(&dispatch.payload)?;

    let local_token = deps.api.addr_validate(&message.local_token)?;
    if local_token == env.contract.address {
        return Err(ContractError::SelfReferentialToken);
    }
    let to = deps.api.addr_validate(&message.to)?;

    let payout_msg: CosmosMsg = match config.role {
        BridgeRole::Escrow => {
            let adapter = EscrowAdapter {
                token: &local_token,
            };
            let msg = adapter.release(
                &env.contract.address,
                &to,
                &message.token_ids,
                &message.amounts,
            )?;
            // Decrement atomically with the transfer-out, per id. Releases
            // never saturate below zero; insufficiency aborts the whole call.
            for (token_id, amount) in message.token_ids.iter().zip(&message.amounts) {
                let key = (&local_token, message.remote_token.as_str(), *token_id);
                let held = DEPOSITS.may_load(deps.storage, key)?.unwrap_or_default();
                if held < *amount {
                    return Err(ContractError::InsufficientEscrow {
                        token_id: *token_id,
                        available: held,
                        requested: *amount,
                    });
                }
                DEPOSITS.save(deps.storage, key, &(held - *amount))?;
            }
            msg
        }
        BridgeRole::MintBurn => {
            assert_representation_capability(&deps.querier, &local_token, &message.remote_token)?;
            let adapter = MintBurnAdapter {
                token: &local_token,
            };
            adapter.mint(&to, &message.token_ids, &message.amounts)?
        }
    };

    let action = if message.token_ids.len() == 1 {
        "bridge_finalized"
    } else {
        "batch_bridge_finalized"
    };
    Ok(Response::new()
        .add_message(payout_msg)
        .add_attribute("action", action)
        .add_attribute("local_token", local_token)
        .add_attribute("remote_token", message.remote_token)
        .add_attribute("from", message.from)
        .add_attribute("to", to)
        .add_attribute("token_ids", join_for_event(&message.token_ids))
        .add_attribute("amounts", join_for_event(&message.amounts))
        .add_attribute("extra_data", message.extra_data.to_base64()))
}
