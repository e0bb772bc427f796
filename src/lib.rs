//! favgen - Library for generating website favicons
//!
//! This library provides functionality to:
//! - Rasterize one SVG source into a fixed set of square PNG favicons
//! - Bundle the smallest of them into a multi-resolution ICO
//! - Do either through ImageMagick or in-process with resvg

pub mod assets;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
