//! Platform-neutral core of the shim console.
//!
//! Everything that decides *what* the console does lives here: the data model
//! shared with the shim server, request construction, default date windows,
//! request keys, the popup completion watcher and the `Console` controller
//! that drives the lookup, authorization and data retrieval flows. Browser
//! specifics are reached only through the traits in [`transport`], [`popup`]
//! and [`panels`].

pub mod config;
pub mod console;
pub mod error;
pub mod keys;
pub mod model;
pub mod panels;
pub mod popup;
pub mod requests;
pub mod transport;
pub mod window;
