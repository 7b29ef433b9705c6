//! Message gateway interface.
//!
//! The gateway is an external transport contract providing an asynchronous,
//! authenticated one-way channel to the paired domain. Outbound, a sender
//! executes [`GatewayExecuteMsg::Send`] with an opaque payload. Inbound, the
//! gateway on the receiving domain executes `Receive(GatewayDispatchMsg)` on
//! the target contract, carrying the authenticated address that called `Send`
//! on the far side. Delivery timing (or delivery at all) is the gateway's
//! business; nothing here waits for it.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, StdResult, WasmMsg};

/// Execute messages accepted by the gateway.
#[cw_serde]
pub enum GatewayExecuteMsg {
    /// Queue `payload` for delivery to `target` on the paired domain.
    ///
    /// `resource_limit` caps the execution resources the dispatch on the far
    /// side may consume. The gateway treats the payload as opaque bytes.
    Send {
        target: String,
        payload: Binary,
        resource_limit: u64,
    },
}

/// Inbound dispatch envelope.
///
/// Receivers must accept this only from their configured gateway address:
/// `origin_sender` is trustworthy precisely because the gateway authenticated
/// it, and anyone else could put an arbitrary string there.
#[cw_serde]
pub struct GatewayDispatchMsg {
    /// The address that called `Send` on the origin domain.
    pub origin_sender: String,
    /// The payload exactly as it was handed to `Send`.
    pub payload: Binary,
}

impl GatewayDispatchMsg {
    /// Serialize this envelope into the receiver's `Receive` execute variant.
    pub fn into_cosmos_msg(self, target: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = ReceiverExecuteMsg::Receive(self);
        let execute = WasmMsg::Execute {
            contract_addr: target.into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        };
        Ok(execute.into())
    }
}

/// Shape of the receiver's entry point; only used to serialize the dispatch.
#[cw_serde]
enum ReceiverExecuteMsg {
    Receive(GatewayDispatchMsg),
}
