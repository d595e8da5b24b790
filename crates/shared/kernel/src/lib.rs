//! Kernel shared by every pattern slice.
//!
//! Keep this crate lightweight: it owns the layered configuration loader, the [`Showcase`]
//! contract each pattern implements, and the [`ShowcaseRegistry`] the facade fills.
//!
//! ## Config loading
//! ```rust,no_run
//! use foundry_kernel::config::load_config;
//! use foundry_kernel::domain::config::ShowcaseConfig;
//!
//! let cfg: ShowcaseConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(!cfg.factory_method.tag.is_empty());
//! ```

pub mod config;
mod error;
pub mod registry;
pub mod showcase;

pub use crate::error::{ShowcaseError, ShowcaseErrorExt};
pub use crate::registry::ShowcaseRegistry;
pub use crate::showcase::Showcase;
pub use foundry_domain as domain;
