//! Capped, newest-first record of successful generations.
//! Persisted as one JSON file in the app data directory; a missing or
//! corrupt file degrades to an empty history, never a startup failure.

pub mod entry;
pub mod store;

pub use entry::*;
pub use store::*;

#[cfg(test)]
mod tests;
