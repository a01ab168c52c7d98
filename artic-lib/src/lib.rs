//! Artwork collection client library
//!
//! An async client for the Art Institute of Chicago collection API together
//! with the state machine behind a paginated, multi-page-selectable artwork
//! table.

pub mod api;
pub mod error;
pub mod list;
pub mod model;
pub mod session;

mod client;

pub use client::*;
