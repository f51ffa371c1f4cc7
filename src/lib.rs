// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-driven sorting visualization engine.
//!
//! Sortviz animates selection sort over a small in-memory dataset by
//! decomposing the conceptually atomic algorithm into discrete, resumable
//! micro-steps: one comparison, one minimum update, or one animation nudge
//! per invocation. The host application owns the window, the event loop,
//! and the actual drawing; this crate owns everything in between.
//!
//! # Key entry points
//!
//! - [`engine::SortEngine`] - the orchestrator: dataset, state machine,
//!   step clock
//! - [`engine::SortCommand`] - the interactive vocabulary
//! - [`algorithm::SortStepper`] - the stepwise state-machine capability
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Frame protocol
//!
//! Each frame the host (1) feeds key events through
//! [`input::InputProcessor`] and executes the resulting commands, (2) calls
//! [`engine::SortEngine::update`] with the elapsed time, which fires at most
//! one logical sort step, and (3) queries [`engine::SortEngine::frame`] for
//! the read-only draw list. Data flows one direction only; the renderer
//! never mutates sort state.

pub mod algorithm;
pub mod animation;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod timing;
