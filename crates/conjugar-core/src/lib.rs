//! conjugar-core — Conjugation tables, drill engine, and session statistics.
//!
//! This crate defines the verb data model, the rule-based conjugation
//! generator, card selection and scoring, and the persisted accuracy
//! counters that the `conjugar` CLI builds on.

pub mod catalog;
pub mod config;
pub mod conjugation;
pub mod drill;
pub mod error;
pub mod model;
pub mod session;
pub mod statistics;
pub mod storage;
