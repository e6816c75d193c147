//! Birth date and segment extraction from 11-digit personal identity codes.
//!
//! Layout: century/sex digit, two digits each for year, month and day of birth,
//! a three digit sequence number and a check digit.

use chrono::NaiveDate;

pub(crate) const IDENTITY_CODE_LENGTH: usize = 11;

/// Fields of an identity code the decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedIdentityCode {
    pub birth_date: NaiveDate,
    /// Last four digits, used for credit segment classification.
    pub segment_value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityCodeError {
    #[error("identity code must be 11 characters, got {0}")]
    Length(usize),
    #[error("identity code must contain only digits")]
    NonDigit,
    #[error("unknown century indicator {0}")]
    Century(u8),
    #[error("no calendar date {year:04}-{month:02}-{day:02}")]
    BirthDate { year: i32, month: u32, day: u32 },
}

impl ParsedIdentityCode {
    pub fn parse(code: &str) -> Result<Self, IdentityCodeError> {
        let digits = digits(code)?;

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            other => return Err(IdentityCodeError::Century(other)),
        };

        let year = century + i32::from(pair(digits[1], digits[2]));
        let month = u32::from(pair(digits[3], digits[4]));
        let day = u32::from(pair(digits[5], digits[6]));

        let birth_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(IdentityCodeError::BirthDate { year, month, day })?;

        let segment_value = digits[7..]
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(*digit));

        Ok(Self {
            birth_date,
            segment_value,
        })
    }

    /// Completed years between the birth date and `today`.
    ///
    /// `None` when the birth date lies after `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        today.years_since(self.birth_date)
    }
}

pub(crate) fn digits(code: &str) -> Result<[u8; IDENTITY_CODE_LENGTH], IdentityCodeError> {
    let length = code.chars().count();
    if length != IDENTITY_CODE_LENGTH {
        return Err(IdentityCodeError::Length(length));
    }

    let mut digits = [0u8; IDENTITY_CODE_LENGTH];
    for (slot, byte) in digits.iter_mut().zip(code.as_bytes()) {
        if !byte.is_ascii_digit() {
            return Err(IdentityCodeError::NonDigit);
        }
        *slot = byte - b'0';
    }
    Ok(digits)
}

fn pair(tens: u8, ones: u8) -> u8 {
    tens * 10 + ones
}
