//! Test helpers shared across crates in the `nerdy-build` workspace.
//!
//! `figment` wraps configuration tests in a `figment::Jail`; `stub` describes
//! shell stand-ins for the external compiler and documentation generator.

pub mod figment;
pub mod stub;
