//! Checked exception enforcement for Kotlin call sites.
//!
//! Kotlin does not enforce `@Throws` declarations, so a call into a Java (or
//! annotated Kotlin) member that throws the checked exception compiles
//! silently. This crate re-implements the check at lint time:
//! - [`resolve`]: does the call's target declare the checked exception?
//! - [`handler`]: is the call inside a catching try or a throwing function?
//! - [`closure`]: is the enclosing closure exempt (throwing contract or safe marker)?
//! - [`violations`]: per-call orchestration and violation construction
//! - [`fix`]: structured fix descriptions offered with each violation
//! - [`registry`]: the static issue table exposed to hosts
//! - [`engine`]: whole-tree analysis and result aggregation

pub mod closure;
pub mod config;
pub mod engine;
pub mod fix;
pub mod handler;
pub mod registry;
pub mod resolve;
pub mod suppress;
pub mod types;
pub mod violations;
