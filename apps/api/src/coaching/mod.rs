//! The coaching core: methodology and example-transcript catalogs, the
//! analysis-focus table, and the prompt composer. Both the HTTP handlers and
//! any future caller consume these single shared definitions.

pub mod analysis;
pub mod composer;
pub mod handlers;
pub mod methodology;
pub mod prompts;
pub mod transcripts;
