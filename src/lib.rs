//! qicompare - statistical comparison of multi-objective search results
//!
//! This library loads per-run quality-indicator samples (one CSV file per
//! algorithm, case study, time budget and indicator), compares experimental
//! conditions pairwise with the Mann-Whitney U test and the Vargha-Delaney
//! A12 effect size, and renders the results as LaTeX tables plus text or
//! JSON summaries.

pub mod aggregate;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod error;
pub mod indicator;
pub mod json_output;
pub mod latex_output;
pub mod loader;
pub mod measurement;
pub mod pipeline;
pub mod report;
pub mod significance;
pub mod text_output;
