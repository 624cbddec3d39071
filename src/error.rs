use thiserror::Error;

/// Scots error messages - gie the user a guid tellin' aff!
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwasumError {
    #[error("Och! Ah dinnae ken whit '{lexeme}' is at column {column}")]
    UnkentToken { lexeme: String, column: usize },

    #[error("Haud yer wheesht! Unexpected '{found}' at column {column} - ah wis expectin' {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        column: usize,
    },

    #[error("Yer number's ower muckle at column {column}: '{value}' doesnae fit in 64 bits")]
    NumberTooMuckle { value: String, column: usize },

    #[error("Whaur's yer target? The line runs oot at column {column} afore the target number")]
    MissingTarget { column: usize },

    #[error("There's naething there! Gie me a line like '[2,7,11,15], 9'")]
    EmptyInput,
}

impl TwasumError {
    /// The column where it aw went wrang, if the error has one
    pub fn column(&self) -> Option<usize> {
        match self {
            TwasumError::UnkentToken { column, .. } => Some(*column),
            TwasumError::UnexpectedToken { column, .. } => Some(*column),
            TwasumError::NumberTooMuckle { column, .. } => Some(*column),
            TwasumError::MissingTarget { column } => Some(*column),
            TwasumError::EmptyInput => None,
        }
    }
}

pub type TwasumResult<T> = Result<T, TwasumError>;

/// Scots phrases fer random error decoration
pub fn random_scots_exclamation() -> &'static str {
    use std::time::{SystemTime, UNIX_EPOCH};
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as usize)
        .unwrap_or(0);

    const PHRASES: &[&str] = &[
        "Och naw!",
        "Jings crivvens!",
        "Michty me!",
        "Help ma boab!",
        "Whit a scunner!",
        "Haud the bus!",
        "Aw naw!",
        "Whit a fankle!",
        "Yer line's gone doolally!",
        "By the wee man!",
        "Whit's aw this then?",
        "Guid grief!",
    ];

    PHRASES[seed % PHRASES.len()]
}

/// Get a helpful suggestion fer common errors
pub fn get_error_suggestion(error: &TwasumError) -> Option<&'static str> {
    match error {
        TwasumError::UnexpectedToken {
            expected, found, ..
        } => {
            if expected == "[" {
                Some("💡 Wrap yer numbers in square brackets: [2,7,11,15], 9")
            } else if found == "end of input" && expected.contains(']') {
                Some("💡 Ye forgot tae close yer list! Add a ] afore the target.")
            } else if expected.contains("',' separator") {
                Some("💡 Pit a comma between the list an' the target: [2,7], 9")
            } else if expected == "end of input" {
                Some("💡 Ane list, ane target - nae extra bits efter the target number!")
            } else {
                None
            }
        }
        TwasumError::MissingTarget { .. } => {
            Some("💡 The target goes efter the list: [2,7,11,15], 9")
        }
        TwasumError::NumberTooMuckle { .. } => {
            Some("💡 Numbers must fit in a signed 64-bit integer.")
        }
        TwasumError::EmptyInput => Some("💡 Try something like: [3,2,4], 6"),
        _ => None,
    }
}

/// A wee helper tae point at the offendin' column wi' a caret
pub fn format_error_context(source: &str, column: usize) -> String {
    let line = source.lines().next().unwrap_or("");
    if column == 0 || line.is_empty() {
        return String::new();
    }

    let mut result = String::new();
    result.push_str(&format!("  {}\n", line));
    // Columns count chars, no' bytes
    let width = column.min(line.chars().count());
    result.push_str(&format!("  {}^\n", " ".repeat(width.saturating_sub(1))));
    result
}
