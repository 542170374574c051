//! Nano Banana Pro image generator - turns a text prompt into a PNG file
//! using Google's Gemini image model.
//!
//! The flow is strictly linear: validate the prompt, issue one generation
//! request, extract the inline image payload, write it to a timestamped file.

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{Error, Result};
