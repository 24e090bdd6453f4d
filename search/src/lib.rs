//! Keystone Search: deterministic best-first planning over economy states.
//!
//! This crate provides the search layer. It depends only on
//! `keystone_kernel` and does NOT depend on `keystone_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! keystone_kernel  ←  keystone_search  ←  keystone_harness
//! (states, rules)     (frontier, plan)    (scenarios, sinks, runner)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchTree`] -- arena of search entries linked by parent index
//! - [`frontier::BestFirstFrontier`] -- priority queue with insertion-order ties
//! - [`best_cost::BestCostTable`] -- cheapest committed cost per state
//! - [`policy::SearchPolicy`] -- iteration cap
//! - [`search::search`] -- the best-first driver
//! - [`plan::plan`] -- driver plus path reconstruction, the primary entry point
//! - [`report::PlanReport`] -- canonical JSON rendering of an outcome

#![forbid(unsafe_code)]

pub mod best_cost;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod plan;
pub mod policy;
pub mod report;
pub mod search;
