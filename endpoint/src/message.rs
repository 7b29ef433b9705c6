//! The cross-domain transfer payload.
//!
//! A [`BridgeMessage`] is the logical content of one transfer (or batch of
//! transfers). The initiating endpoint encodes it, hands it to the gateway as
//! opaque bytes, and the paired endpoint decodes it inside the gateway's
//! dispatch envelope.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Addr, Binary, StdResult, Uint128};

/// Payload of one transfer between paired endpoints. Single-id operations
/// encode length-1 sequences.
///
/// `local_token` and `remote_token` are written from the RECEIVER's vantage
/// point: the sender swaps its own notion of local and remote before encoding
/// (see [`describe_from_receiver_perspective`]), so both endpoints describe
/// the same token pair consistently from where they stand.
#[cw_serde]
pub struct BridgeMessage {
    /// Token address on the receiving domain.
    pub local_token: String,
    /// Token address on the sending domain.
    pub remote_token: String,
    /// Account that initiated the transfer on the sending domain.
    pub from: String,
    /// Recipient account on the receiving domain.
    pub to: String,
    /// Token ids, paired positionally with `amounts`.
    pub token_ids: Vec<u64>,
    /// Amounts, same length as `token_ids`.
    pub amounts: Vec<Uint128>,
    /// Opaque bytes carried through to the finalized event.
    pub extra_data: Binary,
}

impl BridgeMessage {
    /// Encode into the opaque payload handed to the gateway.
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    /// Decode from a gateway dispatch payload.
    pub fn decode(payload: &Binary) -> StdResult<Self> {
        from_json(payload)
    }
}

/// Swap the sender's (local, remote) token pair into the receiver's vantage
/// point: the field the sender calls "local" is the receiver's "remote", and
/// vice versa. Easy to get backwards; the swap lives in this one place.
pub fn describe_from_receiver_perspective(
    local_token: &Addr,
    remote_token: &str,
) -> (String, String) {
    (remote_token.to_string(), local_token.to_string())
}
