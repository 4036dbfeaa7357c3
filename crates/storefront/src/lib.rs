//! `bazaar-storefront` — presentation, configuration and the demo scenario.
//!
//! The domain crates return values; this crate decides how they look.

pub mod config;
pub mod render;
pub mod scenario;

pub use config::{ConfigError, OutputMode, StorefrontConfig};
pub use render::{Locale, Markup, Renderer};
pub use scenario::{ScenarioReport, SampleCatalog};
