//! Target-specific rules supplied by the host.

pub mod layout;

pub use layout::DataLayout;
