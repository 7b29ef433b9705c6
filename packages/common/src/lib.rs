//! Common - Shared Interfaces for the Gateway1155 Bridge Contracts
//!
//! The bridge endpoint talks to two external collaborators: the message
//! gateway that carries payloads between domains, and representation tokens
//! that mirror an origin-domain token. This package defines the message
//! types both sides of those boundaries agree on.

pub mod gateway;
pub mod representation;

pub use gateway::{GatewayDispatchMsg, GatewayExecuteMsg};
pub use representation::{RemoteResponse, RepresentationQueryMsg};
