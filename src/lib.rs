//! twasum - A Wee Two-Sum Solver
//!
//! Twa numbers, ane target!
//!
//! This crate parses puzzle lines like `[2,7,11,15], 9` an' finds the
//! pair o' indices whose values sum tae the target, wi' proper errors
//! instead o' oot-o'-bounds reads on malformed input.

pub mod error;
pub mod finder;
pub mod gcd;
pub mod lexer;
pub mod parser;
pub mod puzzle;
pub mod token;

// Re-export commonly used types
pub use error::{TwasumError, TwasumResult};
pub use finder::{find_pair, IndexPair};
pub use parser::parse;
pub use puzzle::Puzzle;

/// Solve a puzzle line end tae end
///
/// This is a convenience function that handles the full pipeline:
/// lexing, parsing, and the pair search. `Ok(None)` means the line was
/// well-formed but nae pair sums tae the target.
///
/// # Example
/// ```
/// use twasum::solve;
///
/// let pair = solve("[2,7,11,15], 9").unwrap().unwrap();
/// assert_eq!((pair.first, pair.second), (0, 1));
/// ```
pub fn solve(line: &str) -> TwasumResult<Option<IndexPair>> {
    let puzzle = parse(line)?;
    Ok(find_pair(&puzzle.nums, puzzle.target))
}
