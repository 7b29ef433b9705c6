//! Representation token interface.
//!
//! A representation token is a cw1155 contract that mirrors a token held in
//! escrow on another domain. On top of the cw1155 surface it answers the
//! [`RepresentationQueryMsg::Remote`] query with the pairing recorded at its
//! instantiation. Answering that query at all is the capability signal the
//! bridge's compliance gate requires before trusting the contract with a
//! mint call.

use cosmwasm_schema::{cw_serde, QueryResponses};

/// Capability query every representation token must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum RepresentationQueryMsg {
    /// The origin-domain pairing this token represents. Immutable once the
    /// token is instantiated.
    #[returns(RemoteResponse)]
    Remote {},
}

/// The pairing a representation token reports for itself.
#[cw_serde]
pub struct RemoteResponse {
    /// Identifier of the domain the original token lives on.
    pub origin_domain: String,
    /// Address of the original token on that domain.
    pub origin_token: String,
}
