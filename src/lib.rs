//! Scratchpad - a personal toolbox
//!
//! This library bundles three unrelated pieces: single-page web scrapers,
//! a word-matching dashboard served over HTTP, and a set of self-contained
//! algorithm exercises.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod exercises;
pub mod scraping;
