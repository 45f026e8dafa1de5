use crate::domain::model::{BatchResult, CpfRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn cpf_column(&self) -> &str;
    fn has_headers(&self) -> bool;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn report_name(&self) -> &str;
    fn detailed(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CpfRecord>>;
    async fn transform(&self, records: Vec<CpfRecord>) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<String>;
}
