//! Compliance gate for representation tokens.
//!
//! Before the mint/burn endpoint trusts a contract with a mint call, the
//! contract must prove it implements the representation interface by
//! answering the `Remote {}` capability query. The gate is a pure
//! pass-through read against the token's current state; nothing is cached.

use common::{RemoteResponse, RepresentationQueryMsg};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use crate::error::ContractError;

/// Gate a mint: the token must answer the capability query, and the origin
/// pairing it recorded at instantiation must match the remote token named by
/// the finalize message.
pub fn assert_representation_capability(
    querier: &QuerierWrapper,
    token: &Addr,
    expected_remote_token: &str,
) -> Result<(), ContractError> {
    let remote = query_remote(querier, token).map_err(|_| {
        ContractError::NonCompliantRepresentationToken {
            token: token.to_string(),
        }
    })?;
    if remote.origin_token != expected_remote_token {
        return Err(ContractError::RepresentationPairMismatch {
            token: token.to_string(),
            reported: remote.origin_token,
            expected: expected_remote_token.to_string(),
        });
    }
    Ok(())
}

fn query_remote(querier: &QuerierWrapper, token: &Addr) -> StdResult<RemoteResponse> {
    querier.query_wasm_smart(token, &RepresentationQueryMsg::Remote {})
}
