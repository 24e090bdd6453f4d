//! Keystone Kernel: the deterministic economy model behind the planner.
//!
//! # API Surface
//!
//! - [`state::GameState`] -- immutable resource snapshot with structural equality
//! - [`transition::generate_successors`] -- every outgoing edge of a state
//! - [`transition::apply_action`] -- apply one named action to a state
//! - [`replay::replay`] -- re-execute a plan and sum its tick cost
//!
//! # Module Dependency Direction
//!
//! `state` ← `action` ← `rules` ← `transition` ← `replay`
//!
//! One-way only. No cycles. `hash` stands alone and is used by the layers
//! above the kernel for content-addressed reports.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod hash;
pub mod replay;
pub mod rules;
pub mod state;
pub mod transition;
