//! Client for the marketplace REST API.
//!
//! Views never build requests themselves: they receive an `Rc<dyn MarketplaceApi>`
//! through the Leptos context, which lets tests swap in an in-memory fake.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::review::{HelpfulCount, NewReview, RawReply, RawReview, ReviewPage};
use crate::models::testimonial::TestimonialPage;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[async_trait(?Send)]
pub trait MarketplaceApi {
    async fn fetch_testimonials(&self) -> Result<TestimonialPage, ApiError>;

    async fn fetch_reviews_by_freelancer(&self, freelancer_id: u64) -> Result<ReviewPage, ApiError>;

    async fn create_review(
        &self,
        freelancer_id: u64,
        review: &NewReview,
        token: &str,
    ) -> Result<RawReview, ApiError>;

    async fn mark_review_helpful(&self, review_id: u64, token: &str) -> Result<HelpfulCount, ApiError>;

    async fn add_review_reply(&self, review_id: u64, content: &str, token: &str) -> Result<RawReply, ApiError>;
}

#[derive(Serialize)]
struct ReplyBody<'a> {
    content: &'a str,
}

// Django REST framework error bodies look like `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// `MarketplaceApi` over `fetch`, via gloo-net.
#[derive(Debug, Clone, Default)]
pub struct HttpMarketplaceApi {
    config: ApiConfig,
}

impl HttpMarketplaceApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        log!("[API] GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, token: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log!("[API] POST {}", url);
        let request = authorized(Request::post(&url), token)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for HttpMarketplaceApi {
    async fn fetch_testimonials(&self) -> Result<TestimonialPage, ApiError> {
        self.get_json("testimonials/").await
    }

    async fn fetch_reviews_by_freelancer(&self, freelancer_id: u64) -> Result<ReviewPage, ApiError> {
        self.get_json(&format!("reviews/?freelancer={freelancer_id}")).await
    }

    async fn create_review(
        &self,
        freelancer_id: u64,
        review: &NewReview,
        token: &str,
    ) -> Result<RawReview, ApiError> {
        self.post_json(&format!("freelancers/{freelancer_id}/reviews/"), review, token)
            .await
    }

    async fn mark_review_helpful(&self, review_id: u64, token: &str) -> Result<HelpfulCount, ApiError> {
        self.post_json(&format!("reviews/{review_id}/helpful/"), &serde_json::json!({}), token)
            .await
    }

    async fn add_review_reply(&self, review_id: u64, content: &str, token: &str) -> Result<RawReply, ApiError> {
        self.post_json(&format!("reviews/{review_id}/replies/"), &ReplyBody { content }, token)
            .await
    }
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, &status_text);
        error!("[API ERROR] {} {}: {}", status, response.url(), message);
        return Err(ApiError::Status { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Picks the most useful text out of a failed response.
pub fn error_message(body: &str, status_text: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    if status_text.is_empty() {
        "Request failed".to_string()
    } else {
        status_text.to_string()
    }
}
