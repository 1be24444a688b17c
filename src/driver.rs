//! Reads a tree, computes a maximum independent set and writes it out.

use crate::cust_error::{DriverError, ProcessingError};
use crate::mis_finder::{MisFinder, MisResult};
use crate::scanner::Scanner;
use crate::tree::Tree;
use log::info;
use std::io::{Read, Write};

#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    /// Skips the check that the input describes a tree.
    pub trusting: bool,
}

/// Reads the tree and optional root from `input`, solves and writes
/// ```text
/// MIS_size=<k>
/// MIS_nodes=[...]
/// ```
/// to `output`.
pub fn run<R: Read, W: Write>(input: R, output: W, options: &DriverOptions) -> Result<MisResult, DriverError> {
    let mut scanner = Scanner::from_reader(input)?;
    let tree_input = Tree::read_input(&mut scanner)?;
    let (tree, root) = (tree_input.tree, tree_input.root);
    info!("Input: N={}, root={}", tree.size(), root);

    if !options.trusting {
        tree.validate()?;
    }

    let result = MisFinder::new(&tree, root)?.solve();

    if !options.trusting && !tree.validate_independent_set(result.set()) {
        return Err(ProcessingError::InvalidSolution("computed set is not independent".to_owned()).into())
    }

    result.write_result(output).map_err(DriverError::Output)?;
    Ok(result)
}
