use crate::utils::error::CpfError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const CPF_LENGTH: usize = 11;

/// 已確認長度為 11 的數字序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSequence([u8; CPF_LENGTH]);

impl DigitSequence {
    pub fn new(digits: [u8; CPF_LENGTH]) -> Self {
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; CPF_LENGTH] {
        &self.0
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// 通過兩個檢查碼驗證的 CPF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf(DigitSequence);

impl Cpf {
    pub(crate) fn from_verified(digits: DigitSequence) -> Self {
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; CPF_LENGTH] {
        self.0.digits()
    }

    /// 前 9 碼（基本號碼）
    pub fn base(&self) -> &[u8] {
        &self.0.digits()[..9]
    }

    /// 最後兩碼檢查碼
    pub fn check_digits(&self) -> (u8, u8) {
        let digits = self.0.digits();
        (digits[9], digits[10])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::cpf::validate_detailed(s)
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// HTTP 回應本體：`{"isValidCpf": bool}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "isValidCpf")]
    pub is_valid_cpf: bool,
}

impl From<bool> for ValidationResult {
    fn from(is_valid_cpf: bool) -> Self {
        Self { is_valid_cpf }
    }
}

/// 單筆輸入的驗證結果（批次與詳細模式使用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpfVerdict {
    pub line: usize,
    pub input: String,
    pub sanitized: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CpfVerdict {
    pub fn new(line: usize, input: &str, outcome: Result<Cpf, CpfError>) -> Self {
        let sanitized = crate::core::cpf::sanitize(input);
        match outcome {
            Ok(_) => Self {
                line,
                input: input.to_string(),
                sanitized,
                valid: true,
                reason: None,
                message: None,
            },
            Err(e) => Self {
                line,
                input: input.to_string(),
                sanitized,
                valid: false,
                reason: Some(e.code().to_string()),
                message: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub malformed_length: usize,
    pub degenerate_sequence: usize,
    pub checksum_mismatch: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &Result<Cpf, CpfError>) {
        self.total += 1;
        match outcome {
            Ok(_) => self.valid += 1,
            Err(e) => {
                self.invalid += 1;
                match e {
                    CpfError::MalformedLength { .. } => self.malformed_length += 1,
                    CpfError::DegenerateSequence { .. } => self.degenerate_sequence += 1,
                    CpfError::ChecksumMismatch { .. } => self.checksum_mismatch += 1,
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CpfRecord {
    pub line: usize,
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub verdicts: Vec<CpfVerdict>,
    pub summary: BatchSummary,
}
