//! qkk Core Library
//!
//! This crate provides the core functionality for qkk, a terminal tool that
//! searches a kind of Kubernetes resource, lets the user pick one row from a
//! paged list, and runs a `kubectl` action against the picked object.
//!
//! # Key Features
//!
//! - **Listing**: Fetch rows for a resource kind and filter them by a case-insensitive pattern
//! - **Selection Session**: Cursor movement, confirmation and cancellation driven by key events
//! - **Paged Rendering**: Fixed-size pages recomputed from the cursor on every render
//! - **Action Dispatch**: Build the right argument shape per verb and relay the action's output
//! - **Error Handling**: One error type naming the action and resource on every failure path
//!
//! # Examples
//!
//! Building the invocation for a confirmed selection:
//!
//! ```
//! use qkk_core::dispatch::{ActionRequest, Dispatcher};
//!
//! let request = ActionRequest::new(
//!     vec!["logs".to_string()],
//!     "pods",
//!     "web-1",
//!     Some("prod".to_string()),
//! );
//! assert_eq!(request.arguments(), ["logs", "-n", "prod", "web-1"]);
//! assert_eq!(Dispatcher::default().describe(&request), "kubectl logs -n prod web-1");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod listing;
pub mod selection;
