//! Structured records produced from pasted work reports.
//!
//! # Responsibility
//! - Define the canonical shapes handed from parser to binder to renderer.
//! - Keep per-group documentation owned by the group it belongs to.
//!
//! # Invariants
//! - A retained `WorkGroup` has a non-empty name and at least one task.
//! - Task order is the order of appearance in the source text.

pub mod documentation;
pub mod work_group;
