//! C ABI shared-library modules must export.

pub mod abi;
pub mod safety;
