//! Error types for the bridge endpoint.
//!
//! Every error is fatal to the single operation that raised it: no retry, no
//! partial application. Authorization and balance errors raised by the token
//! contract itself pass through untranslated.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Initiate Errors
    // ========================================================================

    #[error("Caller has executable code attached: bridging must be initiated by an externally controlled account")]
    CallerNotExternallyOwned,

    #[error("Remote token address must be non-zero")]
    ZeroRemoteToken,

    // ========================================================================
    // Finalize Errors
    // ========================================================================

    #[error("Unauthorized finalize: sender is not the paired endpoint")]
    UnauthorizedFinalizer,

    #[error("Local token must not be the bridge endpoint itself")]
    SelfReferentialToken,

    #[error("Token {token} does not support the representation capability")]
    NonCompliantRepresentationToken { token: String },

    #[error("Token {token} reports origin pairing {reported}, finalize names {expected}")]
    RepresentationPairMismatch {
        token: String,
        reported: String,
        expected: String,
    },

    #[error("Insufficient escrow for token id {token_id}: {available} held, {requested} requested")]
    InsufficientEscrow {
        token_id: u64,
        available: Uint128,
        requested: Uint128,
    },
}
