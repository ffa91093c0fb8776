use crate::models::EmployeeRecord;
use crate::services::directory::EmployeeDirectory;
use crate::services::metrics::record_directory_query;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::time::Instant;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(
            database = %database,
            collection = %collection,
            "Successfully connected to MongoDB database"
        );
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for employee-service");

        let status_index = IndexModel::builder()
            .keys(doc! { "employmentStatus": 1 })
            .options(
                IndexOptions::builder()
                    .name("employment_status_lookup".to_string())
                    .build(),
            )
            .build();

        self.employees()
            .create_index(status_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create employmentStatus index on {}: {}",
                    self.collection,
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on {}.employmentStatus", self.collection);

        Ok(())
    }

    pub fn employees(&self) -> Collection<EmployeeRecord> {
        self.db.collection(&self.collection)
    }
}

#[async_trait]
impl EmployeeDirectory for MongoDb {
    async fn find_by_employment_status(
        &self,
        status: &str,
    ) -> Result<Vec<EmployeeRecord>, AppError> {
        let start = Instant::now();

        let result = async {
            let cursor = self
                .employees()
                .find(doc! { "employmentStatus": status }, None)
                .await?;
            cursor.try_collect::<Vec<_>>().await
        }
        .await;

        record_directory_query("find_by_employment_status", start.elapsed());

        result.map_err(|e| {
            tracing::error!(status = %status, "Employee query failed: {}", e);
            AppError::from(e)
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
