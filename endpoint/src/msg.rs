//! Message types for the bridge endpoint contract.

use common::GatewayDispatchMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::BridgeRole;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Instantiate message. All three fields are immutable after instantiation.
#[cw_serde]
pub struct InstantiateMsg {
    /// Message gateway address on this domain.
    pub gateway: String,
    /// Paired endpoint address on the other domain.
    pub remote_endpoint: String,
    /// Which side of the escrow/mint duality this instance plays.
    pub role: BridgeRole,
}

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Initiate (externally controlled callers only)
    // ========================================================================
    /// Bridge `amount` of `token_id` to the caller's own address on the
    /// other domain. Escrow role locks the tokens into custody (the caller
    /// must have approved the endpoint as operator first); mint/burn role
    /// burns them.
    Bridge {
        /// Token contract on this domain.
        local_token: String,
        /// Paired token contract on the other domain.
        remote_token: String,
        token_id: u64,
        amount: Uint128,
        /// Resource cap for the finalize dispatch on the other domain.
        resource_limit: u64,
        /// Opaque bytes carried through to both events.
        extra_data: Binary,
    },

    /// Bridge to an explicit recipient on the other domain.
    BridgeTo {
        local_token: String,
        remote_token: String,
        /// Recipient account on the other domain.
        to: String,
        token_id: u64,
        amount: Uint128,
        resource_limit: u64,
        extra_data: Binary,
    },

    /// Batch form of `Bridge`; `token_ids` and `amounts` pair up
    /// positionally and must be the same length.
    BridgeBatch {
        local_token: String,
        remote_token: String,
        token_ids: Vec<u64>,
        amounts: Vec<Uint128>,
        resource_limit: u64,
        extra_data: Binary,
    },

    /// Batch form of `BridgeTo`.
    BridgeBatchTo {
        local_token: String,
        remote_token: String,
        to: String,
        token_ids: Vec<u64>,
        amounts: Vec<Uint128>,
        resource_limit: u64,
        extra_data: Binary,
    },

    // ========================================================================
    // Finalize (gateway only)
    // ========================================================================
    /// Inbound dispatch from the message gateway. The configured gateway is
    /// the sole trusted caller; the envelope carries the gateway-authenticated
    /// far-side sender, which must be the paired endpoint.
    Receive(GatewayDispatchMsg),
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The immutable endpoint configuration.
    #[returns(ConfigResponse)]
    Config {},

    /// Escrowed amount under one (local token, remote token, token id)
    /// position. Zero when the position was never funded.
    #[returns(DepositResponse)]
    Deposit {
        local_token: String,
        remote_token: String,
        token_id: u64,
    },

    /// Paginated enumeration of escrow positions.
    #[returns(DepositsResponse)]
    Deposits {
        start_after: Option<DepositKey>,
        limit: Option<u32>,
    },
}

/// One (local token, remote token, token id) escrow position key.
#[cw_serde]
pub struct DepositKey {
    pub local_token: String,
    pub remote_token: String,
    pub token_id: u64,
}

/// Response for `QueryMsg::Config`
#[cw_serde]
pub struct ConfigResponse {
    pub gateway: Addr,
    pub remote_endpoint: String,
    pub role: BridgeRole,
}

/// Response for `QueryMsg::Deposit`
#[cw_serde]
pub struct DepositResponse {
    pub amount: Uint128,
}

/// Response for `QueryMsg::Deposits`
#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<DepositEntry>,
}

/// One ledger entry in a `Deposits` page.
#[cw_serde]
pub struct DepositEntry {
    pub local_token: Addr,
    pub remote_token: String,
    pub token_id: u64,
    pub amount: Uint128,
}
