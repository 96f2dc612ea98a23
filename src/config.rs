//! Literal generator settings.
//!
//! Counts and output paths are edited here before a run; nothing is read
//! from the command line, the environment, or a file.

use anyhow::Result;
use std::path::Path;

use crate::generate::{self, Report};
use crate::template::{FanOut, LineVolume, UnitTemplate};

/// Number of functions in the fan-out source.
pub const BIG_TEST_FUNCTIONS: u64 = 100_000;
pub const BIG_TEST_PATH: &str = "test_big.c";

/// Number of declaration lines in the line-volume source.
pub const LONG_TEST_LINES: u64 = 2_000_000;
pub const LONG_TEST_PATH: &str = "many_lines.c";

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Many trivial functions plus a `main` calling all of them.
    FanOut,
    /// Many trivial global declarations, one per line.
    LineVolume,
}

impl Variant {
    pub fn template(self) -> &'static dyn UnitTemplate {
        match self {
            Variant::FanOut => &FanOut,
            Variant::LineVolume => &LineVolume,
        }
    }
}

/// Line printed to stdout once the file is written and closed.
pub fn completion_message(path: &str) -> String {
    format!("{path} created")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub variant: Variant,
    pub count: u64,
    pub output_path: &'static str,
}

impl GeneratorConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::FanOut => Self {
                variant,
                count: BIG_TEST_FUNCTIONS,
                output_path: BIG_TEST_PATH,
            },
            Variant::LineVolume => Self {
                variant,
                count: LONG_TEST_LINES,
                output_path: LONG_TEST_PATH,
            },
        }
    }

    /// Generate the file relative to the current directory.
    pub fn run(&self) -> Result<Report> {
        generate::generate_file(
            Path::new(self.output_path),
            self.variant.template(),
            self.count,
        )
    }

    pub fn completion_message(&self) -> String {
        completion_message(self.output_path)
    }
}
