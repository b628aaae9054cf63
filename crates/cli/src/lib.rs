//! qkk CLI Library
//!
//! This crate provides the command-line interface for qkk: it parses the
//! resource kind, namespace, pattern and action from the command line, runs
//! the interactive picker over the listed resources, and hands the picked
//! resource to the dispatcher in `qkk-core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`resource_selection`]: Key mapping and the terminal loop around a selection session
//! - [`outcome`]: Exit codes and final messages for a finished run
//!
//! # Examples
//!
//! ```bash
//! # Follow the logs of a pod in `prod` whose row mentions "api"
//! qkk -r pods -n prod -p api logs -f
//!
//! # Edit a config map in the default namespace
//! qkk -r configmaps edit
//!
//! # Show what would run without running it
//! qkk -r pods --dry-run describe
//! ```

pub mod cli_args;
pub mod outcome;
pub mod resource_selection;
