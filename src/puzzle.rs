use std::fmt;

use serde::Serialize;

/// A parsed puzzle: the number list an' the target they should sum tae
///
/// Read-only once parsed - the order o' `nums` is whit gies the answer
/// its indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl Puzzle {
    pub fn new(nums: Vec<i64>, target: i64) -> Self {
        Puzzle { nums, target }
    }
}

impl fmt::Display for Puzzle {
    /// Formats back intae the input shape, so displayin' then parsin'
    /// gies ye the same puzzle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.nums.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "], {}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let puzzle = Puzzle::new(vec![2, 7, 11, 15], 9);
        assert_eq!(format!("{}", puzzle), "[2, 7, 11, 15], 9");
    }

    #[test]
    fn test_display_empty_list() {
        let puzzle = Puzzle::new(vec![], 5);
        assert_eq!(format!("{}", puzzle), "[], 5");
    }

    #[test]
    fn test_display_negatives() {
        let puzzle = Puzzle::new(vec![-2, 0, 3], -7);
        assert_eq!(format!("{}", puzzle), "[-2, 0, 3], -7");
    }

    #[test]
    fn test_display_parse_round_trip() {
        let puzzles = [
            Puzzle::new(vec![2, 7, 11, 15], 9),
            Puzzle::new(vec![], 5),
            Puzzle::new(vec![i64::MIN, i64::MAX], 0),
            Puzzle::new(vec![3, 3], 6),
        ];

        for puzzle in puzzles {
            let parsed = crate::parser::parse(&format!("{}", puzzle)).unwrap();
            assert_eq!(parsed, puzzle);
        }
    }

    #[test]
    fn test_serialize() {
        let puzzle = Puzzle::new(vec![3, 2, 4], 6);
        let json = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(json["nums"], serde_json::json!([3, 2, 4]));
        assert_eq!(json["target"], 6);
    }
}
