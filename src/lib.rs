//! CalcPad - a blazingly fast, minimalist desktop calculator.
//!
//! The [`app`] module holds everything that thinks (the evaluation
//! pipeline, history, settings, the coordinator); [`ui`] holds everything
//! that draws.

pub mod app;
pub mod ui;
