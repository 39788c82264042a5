//! Domain models for the launch dashboard.
//!
//! The entire data model is one entity: [`LaunchRecord`]. The full record set
//! is loaded once at startup, held immutably for the process lifetime, and
//! discarded at exit. There are no relationships beyond set membership.

mod launch;

pub use launch::*;
