#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

pub mod account;
pub mod app;
pub mod cli;
pub mod entry;
mod macros;
pub mod primitives;
pub mod store;
mod tracing;
pub mod transfer;
