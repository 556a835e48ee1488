use reqwest::Client;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::Film;

/// Thin client for the json-server style backend. Each call maps to one
/// endpoint; no retries, no timeouts, matching the behavior the UI pins.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn films_url(&self) -> String {
        format!("{}/films", self.base_url)
    }

    fn film_url(&self, id: u64) -> String {
        format!("{}/films/{}", self.base_url, id)
    }

    /// GET /films. The body is checked to actually be a JSON array before
    /// deserializing; an object body is `InvalidFormat`, not `Network`.
    pub async fn fetch_films(&self) -> Result<Vec<Film>, ApiError> {
        let resp = self.client.get(self.films_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body: Value = resp.json().await?;
        match body {
            Value::Array(_) => {
                serde_json::from_value(body).map_err(|_| ApiError::InvalidFormat)
            }
            _ => Err(ApiError::InvalidFormat),
        }
    }

    /// PUT /films/{id} with the full record; returns the server's
    /// representation, which the caller treats as authoritative.
    pub async fn update_film(&self, film: &Film) -> Result<Film, ApiError> {
        let resp = self
            .client
            .put(self.film_url(film.id))
            .json(film)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(resp.json().await?)
    }

    /// DELETE /films/{id}. The response body is ignored beyond confirming
    /// a success status.
    pub async fn delete_film(&self, id: u64) -> Result<(), ApiError> {
        let resp = self.client.delete(self.film_url(id)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}
