//! Domain model and the ports the order service talks through.

pub mod event;
pub mod order;
pub mod payment;
pub mod ports;
