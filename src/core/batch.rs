use crate::core::cpf::validate_detailed;
use crate::core::{BatchResult, ConfigProvider, CpfRecord, CpfVerdict, Pipeline, Storage};
use crate::domain::model::BatchSummary;
use crate::utils::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    generated_at: DateTime<Utc>,
    summary: &'a BatchSummary,
    results: &'a [CpfVerdict],
}

/// 從 CSV 讀取 CPF，逐筆驗證後輸出報表
pub struct CsvBatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvBatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn report_path(&self, extension: &str) -> String {
        format!(
            "{}/{}.{}",
            self.config.output_path().trim_end_matches('/'),
            self.config.report_name(),
            extension
        )
    }

    fn column_index(&self, reader: &mut csv::Reader<&[u8]>) -> Result<usize> {
        if !self.config.has_headers() {
            return Ok(0);
        }

        let column = self.config.cpf_column();
        let headers = reader.headers()?;
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .ok_or_else(|| AppError::ConfigValidationError {
                field: "batch.column".to_string(),
                message: format!(
                    "Column '{}' not found in {} (available: {})",
                    column,
                    self.config.input_path(),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            })
    }

    fn render_csv(&self, result: &BatchResult) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["line", "input", "sanitized", "valid", "reason"])?;

        for verdict in &result.verdicts {
            writer.write_record([
                verdict.line.to_string().as_str(),
                verdict.input.as_str(),
                verdict.sanitized.as_str(),
                if verdict.valid { "true" } else { "false" },
                verdict.reason.as_deref().unwrap_or(""),
            ])?;
        }

        writer.into_inner().map_err(|e| AppError::ProcessingError {
            message: format!("Failed to flush CSV report: {}", e),
        })
    }

    fn render_json(&self, result: &BatchResult) -> Result<Vec<u8>> {
        let report = BatchReport {
            generated_at: Utc::now(),
            summary: &result.summary,
            results: &result.verdicts,
        };
        Ok(serde_json::to_vec_pretty(&report)?)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvBatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CpfRecord>> {
        tracing::debug!("Reading CPF input from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.config.has_headers())
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        let column = self.column_index(&mut reader)?;
        tracing::debug!("Using CSV column index {}", column);

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let line = row
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 1);

            // 空白行不算一筆輸入
            if row.iter().all(|field| field.is_empty()) {
                continue;
            }

            records.push(CpfRecord {
                line,
                input: row.get(column).unwrap_or_default().to_string(),
            });
        }

        if records.is_empty() {
            tracing::warn!("No CPF records found in {}", self.config.input_path());
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<CpfRecord>) -> Result<BatchResult> {
        let mut summary = BatchSummary::default();
        let mut verdicts = Vec::with_capacity(records.len());

        for record in records {
            let outcome = validate_detailed(&record.input);
            summary.record(&outcome);

            let mut verdict = CpfVerdict::new(record.line, &record.input, outcome);
            if !self.config.detailed() {
                verdict.reason = None;
                verdict.message = None;
            }

            if !verdict.valid {
                tracing::debug!(
                    line = verdict.line,
                    reason = verdict.reason.as_deref().unwrap_or("invalid"),
                    "Rejected CPF"
                );
            }
            verdicts.push(verdict);
        }

        Ok(BatchResult { verdicts, summary })
    }

    async fn load(&self, result: BatchResult) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let data = match format.as_str() {
                "csv" => self.render_csv(&result)?,
                "json" => self.render_json(&result)?,
                other => {
                    return Err(AppError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported report format".to_string(),
                    })
                }
            };

            let path = self.report_path(format);
            tracing::debug!("Writing {} report ({} bytes) to {}", format, data.len(), path);
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }

        written.into_iter().next().ok_or_else(|| AppError::ConfigValidationError {
            field: "output.formats".to_string(),
            message: "No report format configured".to_string(),
        })
    }
}
