//! Profile synthesis and export pipeline for Personagen.
//!
//! This crate turns a field selection into deterministic profile records,
//! renders them as preview text, and encodes them to JSON or CSV. Search
//! and statistics operate on the rendered text only.

pub mod output;
pub mod preview;
pub mod project;
pub mod search;
pub mod stats;
pub mod synth;

pub use preview::render_preview;
pub use project::project_batch;
pub use search::{MatchSpan, Matches, find_all};
pub use stats::{StatsSummary, summarize};
pub use synth::{DEFAULT_SEED, synthesize};
