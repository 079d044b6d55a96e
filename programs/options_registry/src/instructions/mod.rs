//! Instruction handlers for the options registry protocol
//!
//! Each instruction is one atomic state transition:
//! - `initialize` - Set up the registry (admin only, once)
//! - `set_factory` - Bind the option/redeem factory (admin only)
//! - `ensure_template` - Deploy a kind's canonical template (idempotent)
//! - `verify_token` - Admit an asset into the whitelist (admin, idempotent)
//! - `deploy_option` - Create a paired option/redeem clone (permissionless)
//! - `init_clearing_house` / `wrap_synthetic` - Synthetic wrapper extension

pub mod initialize;
pub mod set_factory;
pub mod ensure_template;
pub mod verify_token;
pub mod deploy_option;
pub mod wrap_synthetic;

pub use initialize::*;
pub use set_factory::*;
pub use ensure_template::*;
pub use verify_token::*;
pub use deploy_option::*;
pub use wrap_synthetic::*;
