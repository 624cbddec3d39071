//! End-tae-end tests fer the twasum library pipeline
//!
//! Covers the documented scenarios: parse a puzzle line, find the pair,
//! an' the properties the answer must satisfy.

use pretty_assertions::assert_eq;

use twasum::{find_pair, parse, solve, IndexPair, Puzzle, TwasumError};

#[test]
fn scenario_classic_pair_at_front() {
    let pair = solve("[2,7,11,15], 9").unwrap();
    assert_eq!(pair, Some(IndexPair::new(0, 1)));
}

#[test]
fn scenario_pair_later_in_list() {
    let pair = solve("[3,2,4], 6").unwrap();
    assert_eq!(pair, Some(IndexPair::new(1, 2)));
}

#[test]
fn scenario_duplicate_values() {
    let pair = solve("[3,3], 6").unwrap();
    assert_eq!(pair, Some(IndexPair::new(0, 1)));
}

#[test]
fn scenario_no_pair() {
    assert_eq!(solve("[1,2,3], 100").unwrap(), None);
}

#[test]
fn scenario_empty_list() {
    assert_eq!(solve("[], 5").unwrap(), None);
}

#[test]
fn scenario_missing_brackets_is_a_parse_error() {
    let err = solve("2,7,11,15, 9").unwrap_err();
    assert_eq!(
        err,
        TwasumError::UnexpectedToken {
            expected: "[".to_string(),
            found: "2".to_string(),
            column: 1,
        }
    );
}

#[test]
fn found_pairs_satisfy_the_sum_invariant() {
    let lines = [
        "[2,7,11,15], 9",
        "[3,2,4], 6",
        "[3,3], 6",
        "[-10, 4, 6, 10], 0",
        "[0, 0], 0",
    ];

    for line in lines {
        let puzzle = parse(line).unwrap();
        let pair = find_pair(&puzzle.nums, puzzle.target).unwrap();
        assert!(pair.first < pair.second, "order broke fer {}", line);
        assert_eq!(
            puzzle.nums[pair.first] + puzzle.nums[pair.second],
            puzzle.target,
            "sum broke fer {}",
            line
        );
    }
}

#[test]
fn solving_twice_gies_the_same_answer() {
    let line = "[5, 1, 4, 1, 8], 9";
    assert_eq!(solve(line).unwrap(), solve(line).unwrap());
}

#[test]
fn display_then_parse_round_trips() {
    let puzzles = [
        Puzzle::new(vec![2, 7, 11, 15], 9),
        Puzzle::new(vec![], 5),
        Puzzle::new(vec![-1, 0, 1], 0),
        Puzzle::new(vec![i64::MIN, i64::MAX], -1),
    ];

    for puzzle in puzzles {
        let reparsed = parse(&puzzle.to_string()).unwrap();
        assert_eq!(reparsed, puzzle);
    }
}

#[test]
fn whitespace_placement_doesnae_matter() {
    let expected = Some(IndexPair::new(0, 1));
    assert_eq!(solve("[2,7],9").unwrap(), expected);
    assert_eq!(solve("[2, 7], 9").unwrap(), expected);
    assert_eq!(solve(" [ 2 , 7 ] , 9 ").unwrap(), expected);
    assert_eq!(solve("[2,7], 9\n").unwrap(), expected);
}

#[test]
fn every_error_is_inspectable_not_a_crash() {
    // Each malformed shape gets its ain distinct error, never a panic
    assert!(matches!(solve("").unwrap_err(), TwasumError::EmptyInput));
    assert!(matches!(
        solve("[2, 7, 9").unwrap_err(),
        TwasumError::UnexpectedToken { .. }
    ));
    assert!(matches!(
        solve("[2,7],").unwrap_err(),
        TwasumError::MissingTarget { .. }
    ));
    assert!(matches!(
        solve("[2,banana], 9").unwrap_err(),
        TwasumError::UnkentToken { .. }
    ));
    assert!(matches!(
        solve("[18446744073709551616], 9").unwrap_err(),
        TwasumError::NumberTooMuckle { .. }
    ));
}
