//! Resource families organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Response shapes as returned by the API
//! - `request.rs`: Typed request parameters (where the family has any)
//! - `client.rs`: Sub-client mapping methods onto endpoints

pub mod ledger;
pub mod order;
pub mod public;
pub mod refund;
pub mod withdrawal;
