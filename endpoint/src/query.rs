//! Query handlers for the bridge endpoint.

use cosmwasm_std::{Addr, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ConfigResponse, DepositEntry, DepositKey, DepositResponse, DepositsResponse};
use crate::state::{CONFIG, DEPOSITS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

/// Query the immutable endpoint configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        gateway: config.gateway,
        remote_endpoint: config.remote_endpoint,
        role: config.role,
    })
}

/// Query one escrow position. Absent entries read as zero.
pub fn query_deposit(
    deps: Deps,
    local_token: String,
    remote_token: String,
    token_id: u64,
) -> StdResult<DepositResponse> {
    let local_token = deps.api.addr_validate(&local_token)?;
    let amount = DEPOSITS
        .may_load(deps.storage, (&local_token, remote_token.as_str(), token_id))?
        .unwrap_or_default();
    Ok(DepositResponse { amount })
}

/// Query a page of escrow positions in key order.
pub fn query_deposits(
    deps: Deps,
    start_after: Option<DepositKey>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_key: Option<(Addr, String, u64)> = start_after
        .map(|key| -> StdResult<_> {
            Ok((
                deps.api.addr_validate(&key.local_token)?,
                key.remote_token,
                key.token_id,
            ))
        })
        .transpose()?;
    let start = start_key
        .as_ref()
        .map(|(local, remote, token_id)| Bound::exclusive((local, remote.as_str(), *token_id)));

    let deposits = DEPOSITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let ((local_token, remote_token, token_id), amount) = item?;
            Ok(DepositEntry {
                local_token,
                remote_token,
                token_id,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}
