//! Command line interface for the demo binary
//!
//! This module provides argument parsing and validation for the demo, which
//! queries a built-in sample tree.

use clap::Parser;

use crate::errors::{FindError, FindResult};
use crate::finder::criteria::{CriteriaFactory, Criterion};

/// Search an in-memory sample file tree with composable criteria
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Match files whose name contains the keyword (can be given multiple times)
    #[arg(short = 'c', long = "contains", value_name = "KEYWORD")]
    pub contains: Vec<String>,

    /// Match files strictly larger than the given size in bytes
    #[arg(short = 'l', long, value_name = "BYTES")]
    pub larger_than: Option<u64>,

    /// Combine criteria with OR instead of AND
    #[arg(long)]
    pub any: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<(), FindError> {
        for keyword in &self.contains {
            if keyword.is_empty() {
                return Err(FindError::EmptyKeyword);
            }
        }
        Ok(())
    }

    /// Build the criteria tree from the arguments
    pub fn build_criteria(&self) -> FindResult<Box<dyn Criterion>> {
        CriteriaFactory::create_criteria(&self.contains, self.larger_than, self.any)
    }
}
