// src/lib.rs

//! Course catalog scraper library.
//!
//! Discovers department listing pages from a catalog index, extracts course
//! blocks from each page and writes them to a quoted CSV file.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
