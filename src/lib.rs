#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::great_circle::intersection;
pub use crate::types::*;

pub mod dms;
mod error;
mod great_circle;
mod rhumb;
mod types;
pub mod utils;
