//! Execute message handlers, split by protocol direction.

mod finalize;
mod initiate;

pub use finalize::execute_receive;
pub use initiate::{
    execute_bridge, execute_bridge_batch, execute_bridge_batch_to, execute_bridge_to,
};

/// Comma-join a sequence for event attributes.
pub(crate) fn join_for_event<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
