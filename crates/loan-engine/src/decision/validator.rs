use super::identity::{digits, ParsedIdentityCode};

/// Structural and checksum validation of identity codes, injected into the engine.
pub trait IdentityCodeValidator: Send + Sync {
    fn is_valid(&self, identity_code: &str) -> bool;
}

/// Validator for Estonian personal identification codes (isikukood).
#[derive(Debug, Default, Clone, Copy)]
pub struct EstonianIdentityCodeValidator;

const FIRST_PASS_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

impl EstonianIdentityCodeValidator {
    /// Check digit for the first ten digits of a code.
    pub fn check_digit(body: &[u8; 10]) -> u8 {
        let remainder = |weights: &[u32; 10]| {
            let sum: u32 = body
                .iter()
                .zip(weights)
                .map(|(digit, weight)| u32::from(*digit) * weight)
                .sum();
            sum % 11
        };

        let check = match remainder(&FIRST_PASS_WEIGHTS) {
            10 => match remainder(&SECOND_PASS_WEIGHTS) {
                10 => 0,
                value => value,
            },
            value => value,
        };
        check as u8
    }
}

impl IdentityCodeValidator for EstonianIdentityCodeValidator {
    fn is_valid(&self, identity_code: &str) -> bool {
        let Ok(digits) = digits(identity_code) else {
            return false;
        };
        if ParsedIdentityCode::parse(identity_code).is_err() {
            return false;
        }

        let mut body = [0u8; 10];
        body.copy_from_slice(&digits[..10]);
        Self::check_digit(&body) == digits[10]
    }
}
