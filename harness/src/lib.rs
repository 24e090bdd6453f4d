//! Keystone Harness: the calling layer around the planner.
//!
//! The harness loads a scenario, runs `plan`, hands the outcome to a
//! diagnostic sink, and replays the plan through an execution consumer to
//! confirm it is executable at the reported cost.
//!
//! The harness does NOT implement search logic; it delegates to
//! `keystone_search`. All logging lives here, never in the core crates.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod consumer;
pub mod contract;
pub mod runner;
pub mod scenario;
pub mod scenarios;
pub mod sink;
