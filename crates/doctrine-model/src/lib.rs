//! Doctrine Model
//!
//! Immutable value records shared by the generation engine:
//! - [`Trait`]: one cognitive dimension of a blueprint
//! - [`Assumption`]: a factor/value pair driving scenario scoring
//! - [`Branch`]: one candidate outcome path with its rationale
//! - [`SimulationResult`]: probability, drivers and branches of a simulation
//! - [`Artifact`]: source text used only as a keyword signal
//!
//! Closed vocabularies ([`DraftMode`], [`Audience`], [`TraitCategory`],
//! [`DecisionType`]) are explicit enums so every lookup over them is
//! exhaustively checked.
//!
//! # Example
//!
//! ```rust
//! use doctrine_model::{Assumption, DraftMode};
//!
//! let assumption = Assumption::new("Market Demand", "High");
//! assert!(assumption.is_complete());
//!
//! let mode: DraftMode = "board-memo".parse().unwrap();
//! assert_eq!(mode, DraftMode::BoardMemo);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod kinds;
mod records;

pub use error::ModelError;
pub use kinds::{Audience, DecisionType, DraftMode, TraitCategory};
pub use records::{retain_complete, Artifact, Assumption, Branch, SimulationResult, Trait};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
