//! Spidergen Core Library
//!
//! This library provides the core functionality for generating Scrapy
//! spider skeletons from a small set of named parameters.

pub mod error;
pub mod params;
pub mod templates;

pub use crate::{
    error::{Error, Result},
    params::{SpiderParams, DEFAULT_URL},
    templates::SpiderRenderer,
};
