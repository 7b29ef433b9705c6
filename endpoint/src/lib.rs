//! Bridge Endpoint Contract - Paired Escrow/Mint Bridging of Multi-Id Tokens
//!
//! Two instances of this contract, one per domain, move ownership of cw1155
//! token ids between an origin domain and a destination domain connected only
//! by an authenticated one-way message channel in each direction.
//!
//! # Escrow side (origin domain)
//! 1. A user approves the endpoint as operator and calls `Bridge`
//! 2. The endpoint pulls the tokens into its own custody and records the
//!    amount in the deposit ledger
//! 3. The gateway carries the encoded finalize call to the paired endpoint
//!
//! # Mint/burn side (destination domain)
//! 1. The gateway dispatches the finalize call together with the
//!    authenticated far-side sender
//! 2. The endpoint verifies the sender is its paired endpoint and that the
//!    target token passes the representation compliance gate
//! 3. The representation token is minted to the recipient
//!
//! The reverse direction burns the representation token on initiate and
//! releases escrow on finalize.
//!
//! # Security
//! - Finalize accepts only gateway dispatches authenticated as the paired
//!   endpoint
//! - The deposit ledger guards every escrow release: nothing can be released
//!   that was never locked under the same token pair and id
//! - The compliance gate refuses to mint on contracts that do not implement
//!   the representation interface
//! - Initiation is restricted to externally controlled accounts

pub mod adapter;
pub mod contract;
pub mod error;
mod execute;
pub mod gate;
pub mod message;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::message::{describe_from_receiver_perspective, BridgeMessage};
