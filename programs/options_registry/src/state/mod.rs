//! State structures for the options registry protocol

pub mod factory;
pub mod option;
pub mod registry;
pub mod synthetic;
pub mod verified;

pub use factory::*;
pub use option::*;
pub use registry::*;
pub use synthetic::*;
pub use verified::*;
