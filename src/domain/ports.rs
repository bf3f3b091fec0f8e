use crate::domain::model::{TransferInputs, TransferResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Writes `data` to `path`, creating missing parent directories. Returns the full path written.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &str;
    fn courses_file(&self) -> &str;
    fn programs_file(&self) -> &str;
    fn reports_dir(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<TransferInputs>;
    async fn transform(&self, inputs: TransferInputs) -> Result<TransferResult>;
    async fn load(&self, result: TransferResult) -> Result<String>;
}
