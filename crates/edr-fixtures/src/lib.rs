//! Fixture generators for endpoint action records
//!
//! Produces plausible, overridable synthetic documents for tests: action
//! requests, their responses, search-hit envelopes, and activity log
//! entries.
//!
//! # Core Concepts
//!
//! - [`BaseGenerator`]: an owned, seedable random source with the
//!   primitives every fixture draws from
//! - [`EndpointActionGenerator`]: builds fully-populated records and merges
//!   caller overrides on top, field by field
//!
//! Generation is deterministic given a fixed seed:
//!
//! ```rust
//! use edr_fixtures::EndpointActionGenerator;
//! use edr_types::EndpointActionOverrides;
//!
//! let mut generator = EndpointActionGenerator::with_seed(42);
//! let action = generator.generate(EndpointActionOverrides::new());
//! assert!(action.endpoint_actions.expiration > action.timestamp);
//! ```
//!
//! Each generator instance owns its random stream; use one instance per
//! thread.

mod base;
mod endpoint_actions;

pub use base::BaseGenerator;
pub use endpoint_actions::EndpointActionGenerator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
