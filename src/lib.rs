//! Single-client latency microbenchmark for Redis-protocol key-value stores.
//!
//! Drives a sequential set / get-and-verify / delete workload over one
//! connection and reports the average per-operation latency of each phase.

pub mod error;
pub mod runner;
pub mod stats;
pub mod store;
pub mod workload;
