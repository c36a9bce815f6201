//! Application layer orchestrating the domain ports.
//!
//! This module defines the `OrderService`, the single entry point for
//! creating orders, listing them per user and relaying payments.

pub mod service;
