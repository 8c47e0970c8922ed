//! Command line client for the online tenant management API
//!
//! The binary parses a verb and its options, resolves names to identifiers
//! against the remote service, submits the request and logs what comes back.
//!
//! - `cli` - argument parsing, dispatch and logging setup
//! - `tenant` - one routine per verb
//! - `service` - the management API contract and its REST implementation
//! - `model` - records exchanged with the service

pub mod cli;
pub mod error;
pub mod model;
pub mod options;
pub mod prompt;
pub mod service;
pub mod tenant;

pub use error::Error;
