use std::time::Duration;

use client_logging::client_error;
use serde::de::DeserializeOwned;

use crate::types::{
    AddCompanyBody, BulkCompanyBody, BulkOutcome, CollectionPage, CollectionSummary, Company,
    CompanyBatch, CompanyId, RemoveAck,
};
use crate::{ApiError, ApiFailure};

/// Connection settings for the REST backend.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Stateless access to the company/collection REST operations.
///
/// Every call maps one HTTP request to one typed response; non-2xx statuses
/// come back as [`ApiFailure::HttpStatus`].
#[async_trait::async_trait]
pub trait CompanyApi: Send + Sync {
    async fn list_companies(
        &self,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<CompanyBatch, ApiError>;

    async fn fetch_collection(
        &self,
        collection_id: &str,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<CollectionPage, ApiError>;

    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, ApiError>;

    async fn add_company(
        &self,
        collection_id: &str,
        company_id: CompanyId,
    ) -> Result<Company, ApiError>;

    async fn remove_company(
        &self,
        collection_id: &str,
        company_id: CompanyId,
    ) -> Result<RemoveAck, ApiError>;

    async fn bulk_add(
        &self,
        collection_id: &str,
        company_ids: &[CompanyId],
    ) -> Result<BulkOutcome, ApiError>;

    async fn bulk_remove(
        &self,
        collection_id: &str,
        company_ids: &[CompanyId],
    ) -> Result<BulkOutcome, ApiError>;
}

/// `CompanyApi` implementation over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct RestApi {
    base_url: String,
    client: reqwest::Client,
}

impl RestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(ApiFailure::InvalidBaseUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        op: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            let err = map_reqwest_error(err);
            client_error!("{} failed: {}", op, err);
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::new(ApiFailure::HttpStatus(status.as_u16()), status.to_string());
            client_error!("{} failed: {}", op, err);
            return Err(err);
        }

        response.json::<T>().await.map_err(|err| {
            let err = map_reqwest_error(err);
            client_error!("{} failed: {}", op, err);
            err
        })
    }
}

#[async_trait::async_trait]
impl CompanyApi for RestApi {
    async fn list_companies(
        &self,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<CompanyBatch, ApiError> {
        let request = self
            .client
            .get(self.endpoint("/companies"))
            .query(&page_query(offset, limit));
        self.execute("GET /companies", request).await
    }

    async fn fetch_collection(
        &self,
        collection_id: &str,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<CollectionPage, ApiError> {
        let request = self
            .client
            .get(self.endpoint(&format!("/collections/{collection_id}")))
            .query(&page_query(offset, limit));
        self.execute("GET /collections/{id}", request).await
    }

    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, ApiError> {
        let request = self.client.get(self.endpoint("/collections"));
        self.execute("GET /collections", request).await
    }

    async fn add_company(
        &self,
        collection_id: &str,
        company_id: CompanyId,
    ) -> Result<Company, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&format!("/collections/{collection_id}/companies")))
            .json(&AddCompanyBody { company_id });
        self.execute("POST /collections/{id}/companies", request)
            .await
    }

    async fn remove_company(
        &self,
        collection_id: &str,
        company_id: CompanyId,
    ) -> Result<RemoveAck, ApiError> {
        let request = self.client.delete(self.endpoint(&format!(
            "/collections/{collection_id}/companies/{company_id}"
        )));
        self.execute("DELETE /collections/{id}/companies/{company_id}", request)
            .await
    }

    async fn bulk_add(
        &self,
        collection_id: &str,
        company_ids: &[CompanyId],
    ) -> Result<BulkOutcome, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&format!("/collections/{collection_id}/companies/bulk")))
            .json(&BulkCompanyBody {
                company_ids: company_ids.to_vec(),
            });
        self.execute("POST /collections/{id}/companies/bulk", request)
            .await
    }

    async fn bulk_remove(
        &self,
        collection_id: &str,
        company_ids: &[CompanyId],
    ) -> Result<BulkOutcome, ApiError> {
        // The backend expects the id list as a JSON body on DELETE.
        let request = self
            .client
            .delete(self.endpoint(&format!("/collections/{collection_id}/companies/bulk")))
            .json(&BulkCompanyBody {
                company_ids: company_ids.to_vec(),
            });
        self.execute("DELETE /collections/{id}/companies/bulk", request)
            .await
    }
}

fn page_query(offset: Option<usize>, limit: Option<usize>) -> Vec<(&'static str, usize)> {
    let mut query = Vec::new();
    if let Some(offset) = offset {
        query.push(("offset", offset));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit));
    }
    query
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiFailure::Decode, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
