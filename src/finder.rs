use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Twa distinct positions whose values sum tae the target, lower first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        IndexPair { first, second }
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Find ane pair o' indices whose values sum tae the target
///
/// A single left-tae-right pass: at each position the complement
/// (target - value) is looked up in a map o' values already seen. First
/// match by scan order wins, so among several valid pairs the ane wi'
/// the smallest second index comes back. O(n) time, O(n) space - that's
/// the whole point o' the map over a nested loop.
///
/// `None` means nae pair exists; it's never conflated wi' a real answer.
pub fn find_pair(nums: &[i64], target: i64) -> Option<IndexPair> {
    // SeenMap: value -> first position it appeared at
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &n) in nums.iter().enumerate() {
        // An unrepresentable complement cannae match onything
        if let Some(complement) = target.checked_sub(n) {
            if let Some(&j) = seen.get(&complement) {
                return Some(IndexPair::new(j, i));
            }
        }
        // Keep the first occurrence - duplicates pair wi' it
        seen.entry(n).or_insert(i);
    }

    None
}
