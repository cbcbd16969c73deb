//! Warikan Types
//!
//! This crate defines the core types and data structures shared by the
//! warikan ecosystem (`warikan-core` and `warikan-cli`): the role model, the
//! per-calculation configuration and the computed payment schedule. Keeping
//! them in a leaf crate avoids circular dependencies between the calculation
//! core and its front ends.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;

pub use types::{
    PaymentResult, Role, RoleEdit, RoleId, RolePayment, RoleRecord, SplitConfig,
};
