//! PDKS attendance report assistant.
//!
//! This crate answers free-text attendance report requests ("Finans
//! departmanı mart ayı giriş raporu") by extracting intent slots from the
//! text, choosing a conversational reply from the filled slots, and
//! assembling a filtered report from departments, employees and attendance
//! records.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod policy;
pub mod registry;
pub mod report;
pub mod store;
pub mod text;
