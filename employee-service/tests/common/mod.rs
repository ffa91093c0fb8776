#![allow(dead_code)]

use async_trait::async_trait;
use employee_service::config::{EmployeeConfig, MongoConfig, DEFAULT_EMPLOYEE_COLLECTION};
use employee_service::models::EmployeeRecord;
use employee_service::services::EmployeeDirectory;
use employee_service::startup::{Application, CELEBRATIONS_PATH};
use mongodb::bson::{from_document, Document};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;

/// Directory backed by a fixed set of documents.
pub struct InMemoryDirectory {
    records: Vec<EmployeeRecord>,
    failure: Option<String>,
}

impl InMemoryDirectory {
    pub fn new(documents: Vec<Document>) -> Self {
        let records = documents
            .into_iter()
            .map(|doc| from_document(doc).expect("Invalid employee document"))
            .collect();
        Self {
            records,
            failure: None,
        }
    }

    /// A directory whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn find_by_employment_status(
        &self,
        status: &str,
    ) -> Result<Vec<EmployeeRecord>, AppError> {
        self.check()?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.employment_status.as_deref() == Some(status))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn test_config() -> EmployeeConfig {
    EmployeeConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        mongodb: MongoConfig {
            uri: Secret::new("mongodb://localhost:27017".to_string()),
            database: "employee_test".to_string(),
            collection: DEFAULT_EMPLOYEE_COLLECTION.to_string(),
            create_indexes: false,
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(documents: Vec<Document>) -> Self {
        Self::spawn_with(InMemoryDirectory::new(documents)).await
    }

    pub async fn spawn_with(directory: InMemoryDirectory) -> Self {
        let app = Application::build_with_directory(test_config(), Arc::new(directory))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_with_shutdown(std::future::pending()).await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_celebrations(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, CELEBRATIONS_PATH))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
