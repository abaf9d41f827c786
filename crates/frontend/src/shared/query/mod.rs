//! Keyed request cache shared by every entity binding.

pub mod cache;
pub mod client;
pub mod key;

pub use client::{use_mutation, use_query, MutationHandle, QueryClient, QueryResult};
pub use key::{Domain, QueryKey};
