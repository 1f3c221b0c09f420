//! `vswr-fom` library crate.
//!
//! The binary (`vswr-fom`) is a thin wrapper around this library so that:
//!
//! - parsing, scoring, and report formatting are testable without spawning processes
//! - the stages (parser, scorer, reporter) can be reused independently

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod merit;
pub mod plot;
pub mod report;
