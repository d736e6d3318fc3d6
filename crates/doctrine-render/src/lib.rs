//! Doctrine Render
//!
//! Deterministic long-form document synthesis:
//! - [`render_doctrine_manual`]: numbered doctrine sections for a blueprint
//! - [`render_playbook`]: five-section narrative playbook for an audience
//! - [`synthesize_draft`]: board memo, investment evaluation or PR fallout
//!   draft in the founder's voice
//! - [`lexicon`]: closed audience and tone phrasing tables
//!
//! Renderers take the date to print as an argument and never read a clock.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use doctrine_model::Audience;
//! use doctrine_render::render_playbook;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let playbook = render_playbook("Category King", &Audience::Investors, "", date).unwrap();
//! assert!(playbook.contains("Generated: March 7, 2024"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod date;
mod error;
pub mod layout;
pub mod lexicon;
mod manual;
mod playbook;
pub mod twin;

pub use date::long_date;
pub use error::RenderError;
pub use manual::{render_doctrine_manual, section_count};
pub use playbook::{has_constraints_block, render_playbook};
pub use twin::synthesize_draft;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
