//! Token adapters: stateless wrappers that build cw1155 messages.
//!
//! The escrow adapter pulls tokens into the endpoint's custody and pays them
//! back out; the mint/burn adapter destroys and recreates a representation
//! token. Neither retains any state between calls. Authorization and balance
//! errors raised by the token contract abort the whole transaction
//! untranslated.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdError, StdResult, Uint128, WasmMsg};
use cw1155::Cw1155ExecuteMsg;

/// Pair up the ordered id/amount sequences, rendering ids to the cw1155
/// string form. A length mismatch surfaces as a token-standard-level error,
/// not a protocol one.
pub fn zip_batch(token_ids: &[u64], amounts: &[Uint128]) -> StdResult<Vec<(String, Uint128)>> {
    if token_ids.len() != amounts.len() {
        return Err(StdError::generic_err(format!(
            "token id and amount sequences differ in length: {} vs {}",
            token_ids.len(),
            amounts.len()
        )));
    }
    Ok(token_ids
        .iter()
        .map(u64::to_string)
        .zip(amounts.iter().copied())
        .collect())
}

fn execute_on(token: &Addr, msg: &Cw1155ExecuteMsg) -> StdResult<CosmosMsg> {
    let execute = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    };
    Ok(execute.into())
}

/// Escrow-side adapter: moves tokens between an account and the endpoint's
/// own custody via the token's authorized-transfer entry point.
pub struct EscrowAdapter<'a> {
    pub token: &'a Addr,
}

impl EscrowAdapter<'_> {
    /// Pull `amounts` of `token_ids` from `from` into the endpoint's custody.
    /// Requires `from` to have approved the endpoint as an operator; the
    /// token's own authorization error aborts the transfer otherwise.
    pub fn take(
        &self,
        endpoint: &Addr,
        from: &Addr,
        token_ids: &[u64],
        amounts: &[Uint128],
    ) -> StdResult<CosmosMsg> {
        self.transfer(from.as_str(), endpoint.as_str(), token_ids, amounts)
    }

    /// Pay `amounts` of `token_ids` out of the endpoint's custody to `to`.
    /// Cannot fail once the deposit ledger sufficiency check has passed.
    pub fn release(
        &self,
        endpoint: &Addr,
        to: &Addr,
        token_ids: &[u64],
        amounts: &[Uint128],
    ) -> StdResult<CosmosMsg> {
        self.transfer(endpoint.as_str(), to.as_str(), token_ids, amounts)
    }

    fn transfer(
        &self,
        from: &str,
        to: &str,
        token_ids: &[u64],
        amounts: &[Uint128],
    ) -> StdResult<CosmosMsg> {
        let mut batch = zip_batch(token_ids, amounts)?;
        let msg = if batch.len() == 1 {
            let (token_id, value) = batch.remove(0);
            Cw1155ExecuteMsg::SendFrom {
                from: from.to_string(),
                to: to.to_string(),
                token_id,
                value,
                msg: None,
            }
        } else {
            Cw1155ExecuteMsg::BatchSendFrom {
                from: from.to_string(),
                to: to.to_string(),
                batch,
                msg: None,
            }
        };
        execute_on(self.token, &msg)
    }
}

/// Mint/burn-side adapter for a representation token.
pub struct MintBurnAdapter<'a> {
    pub token: &'a Addr,
}

impl MintBurnAdapter<'_> {
    /// Destroy `amounts` of `token_ids` from `from`'s balance. The token's
    /// own insufficient-balance error aborts the transfer otherwise.
    pub fn burn(&self, from: &Addr, token_ids: &[u64], amounts: &[Uint128]) -> StdResult<CosmosMsg> {
        let mut batch = zip_batch(token_ids, amounts)?;
        let msg = if batch.len() == 1 {
            let (token_id, value) = batch.remove(0);
            Cw1155ExecuteMsg::Burn {
                from: from.to_string(),
                token_id,
                value,
            }
        } else {
            Cw1155ExecuteMsg::BatchBurn {
                from: from.to_string(),
                batch,
            }
        };
        execute_on(self.token, &msg)
    }

    /// Create `amounts` of `token_ids` for `to`. Only invoked after the
    /// compliance gate has accepted the token.
    pub fn mint(&self, to: &Addr, token_ids: &[u64], amounts: &[Uint128]) -> StdResult<CosmosMsg> {
        let mut batch = zip_batch(token_ids, amounts)?;
        let msg = if batch.len() == 1 {
            let (token_id, value) = batch.remove(0);
            Cw1155ExecuteMsg::Mint {
                to: to.to_string(),
                token_id,
                value,
                msg: None,
            }
        } else {
            Cw1155ExecuteMsg::BatchMint {
                to: to.to_string(),
                batch,
                msg: None,
            }
        };
        execute_on(self.token, &msg)
    }
}
