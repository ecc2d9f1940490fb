//! Typed client for the CrunchBase v1 REST API.
//!
//! Covers exactly the three calls the funding report needs: entity
//! search, company detail, and financial-organization detail. Wire
//! shapes live in [`types`]; [`normalize`] converts them into the
//! domain entities of `cbminer-core`.

mod client;
mod error;
pub mod normalize;
pub mod types;

pub use client::CrunchbaseClient;
pub use error::CrunchbaseError;
