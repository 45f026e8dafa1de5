//! CPF checksum validation.
//!
//! The validator runs in a fixed order and stops at the first failure:
//! sanitize, structural check, parse, first check digit, second check digit.

use crate::domain::model::{Cpf, DigitSequence, CPF_LENGTH};
use crate::utils::error::CpfError;

/// Keeps only the ASCII digits of `input`, in order.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Rejects sanitized input that can never be a CPF.
///
/// Must run before [`parse_digits`].
pub fn check_structure(sanitized: &str) -> Result<(), CpfError> {
    if sanitized.len() != CPF_LENGTH {
        return Err(CpfError::MalformedLength {
            found: sanitized.len(),
        });
    }

    let bytes = sanitized.as_bytes();
    let first = bytes[0];
    if bytes.iter().all(|&b| b == first) {
        return Err(CpfError::DegenerateSequence {
            digit: first.wrapping_sub(b'0'),
        });
    }

    Ok(())
}

/// Converts a structurally checked string into a [`DigitSequence`].
pub fn parse_digits(sanitized: &str) -> Result<DigitSequence, CpfError> {
    let parsed: Vec<u8> = sanitized
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    let found = parsed.len();
    let digits: [u8; CPF_LENGTH] = parsed
        .try_into()
        .map_err(|_| CpfError::MalformedLength { found })?;

    Ok(DigitSequence::new(digits))
}

/// Computes the check digit for the first `prefix_len` digits.
///
/// Weights run from `prefix_len + 1` down to 2. A remainder below 2 yields 0.
pub fn check_digit(digits: &[u8], prefix_len: usize) -> u8 {
    let sum: u32 = digits
        .iter()
        .take(prefix_len)
        .zip((2..=prefix_len as u32 + 1).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

fn verify_check_digit(digits: &DigitSequence, prefix_len: usize) -> Result<(), CpfError> {
    let expected = check_digit(digits.digits(), prefix_len);
    let found = digits.digits()[prefix_len];
    if expected != found {
        return Err(CpfError::ChecksumMismatch {
            position: (prefix_len + 1) as u8,
            expected,
            found,
        });
    }
    Ok(())
}

/// Validates `input` and reports which step rejected it.
pub fn validate_detailed(input: &str) -> Result<Cpf, CpfError> {
    let sanitized = sanitize(input);
    check_structure(&sanitized)?;

    let digits = parse_digits(&sanitized)?;
    verify_check_digit(&digits, 9)?;
    verify_check_digit(&digits, 10)?;

    Ok(Cpf::from_verified(digits))
}

/// Returns whether `input` is a valid CPF. Every failure collapses to `false`.
pub fn validate(input: &str) -> bool {
    validate_detailed(input).is_ok()
}
