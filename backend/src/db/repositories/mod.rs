//! Repository implementations.
//!
//! Only the in-memory [`LocalRepository`] exists; the plan is read-only and
//! loaded once at startup.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
