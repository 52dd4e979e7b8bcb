use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidDateError;

/// The [StatementDate] is a newtype wrapping the `dd/mm/yyyy` text a date was entered with.
/// This is used to guarantee that every recorded transaction carries a well-shaped date, while
/// keeping the exact input spelling for statement lines.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct StatementDate(String);

impl StatementDate {
    /// Accepts exactly ten characters shaped `dd/mm/yyyy`. Calendar validity is not checked.
    pub fn parse(input: &str) -> Result<Self, InvalidDateError> {
        let bytes = input.as_bytes();

        if bytes.len() != 10 {
            return Err(InvalidDateError);
        }

        let well_shaped = bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'/',
            _ => byte.is_ascii_digit(),
        });

        if !well_shaped {
            return Err(InvalidDateError);
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
