//! Configuration model, layout engine and code synthesizer for a floating
//! social-links widget.
//!
//! A [`store::ConfigStore`] owns the live [`model::WizardConfig`]. Its
//! snapshots project into satellite placements ([`geometry`]), a renderer
//! view ([`preview`]) and embeddable source text ([`codegen`]).

pub mod macros;

pub mod codegen;
pub mod geometry;
pub mod model;
pub mod preview;
pub mod reference;
pub mod store;

pub use codegen::synthesize;
pub use model::WizardConfig;
pub use store::{ConfigStore, Snapshot, StoreError};
