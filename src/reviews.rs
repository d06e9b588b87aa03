//! Review panel operations: validation, auth and the API round trip.
//!
//! `ReviewService` returns what the server confirmed; merging that into the
//! displayed list is done by the caller with the helpers in
//! [`crate::state::review_list`], against whatever the list holds when the
//! response lands.

use crate::api::MarketplaceApi;
use crate::auth::TokenProvider;
use crate::config::{ApiConfig, MIN_REVIEW_LENGTH};
use crate::error::ReviewError;
use crate::models::review::{NewReview, Reply, Review};
use crate::state::review_list::{self, ReviewList};
use leptos::logging::log;
use std::rc::Rc;

/// Trims `content` and checks it is long enough to submit.
pub fn validate_review_content(content: &str) -> Result<String, ReviewError> {
    let trimmed = content.trim();
    let actual = trimmed.chars().count();
    if actual < MIN_REVIEW_LENGTH {
        return Err(ReviewError::ContentTooShort {
            min: MIN_REVIEW_LENGTH,
            actual,
        });
    }
    Ok(trimmed.to_string())
}

/// Review ids are strings in the view model and integers on the wire.
pub fn parse_review_id(review_id: &str) -> Result<u64, ReviewError> {
    review_id
        .parse()
        .map_err(|_| ReviewError::InvalidReviewId(review_id.to_string()))
}

#[derive(Clone)]
pub struct ReviewService {
    api: Rc<dyn MarketplaceApi>,
    tokens: Rc<dyn TokenProvider>,
    token_template: String,
}

impl ReviewService {
    pub fn new(api: Rc<dyn MarketplaceApi>, tokens: Rc<dyn TokenProvider>, config: &ApiConfig) -> Self {
        Self {
            api,
            tokens,
            token_template: config.token_template.clone(),
        }
    }

    async fn token(&self) -> Result<String, ReviewError> {
        Ok(self.tokens.token(&self.token_template).await?)
    }

    /// Fetches and normalizes every review of a freelancer.
    pub async fn load(&self, freelancer_id: u64) -> Result<ReviewList, ReviewError> {
        let page = self.api.fetch_reviews_by_freelancer(freelancer_id).await?;
        log!(
            "[REVIEWS] Received {} reviews for freelancer {}",
            page.results.len(),
            freelancer_id
        );
        Ok(review_list::from_reviews(page.results.into_iter().map(Review::from)))
    }

    /// Submits a review. Short content is rejected before any request is made.
    pub async fn submit(
        &self,
        freelancer_id: Option<u64>,
        rating: u8,
        content: &str,
    ) -> Result<Review, ReviewError> {
        let freelancer_id = freelancer_id.ok_or(ReviewError::MissingFreelancer)?;
        let content = validate_review_content(content)?;
        let token = self.token().await?;

        let created = self
            .api
            .create_review(freelancer_id, &NewReview { rating, content }, &token)
            .await?;
        log!("[REVIEWS] Created review {} for freelancer {}", created.id, freelancer_id);
        Ok(Review::from(created))
    }

    /// Returns the server's helpful count for `review_id`.
    pub async fn mark_helpful(&self, review_id: &str) -> Result<u32, ReviewError> {
        let id = parse_review_id(review_id)?;
        let token = self.token().await?;
        let counted = self.api.mark_review_helpful(id, &token).await?;
        Ok(counted.helpful_count)
    }

    /// Posts a reply and returns it labelled as the current user's.
    pub async fn add_reply(&self, review_id: &str, content: &str) -> Result<Reply, ReviewError> {
        let id = parse_review_id(review_id)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(ReviewError::EmptyReply);
        }
        let token = self.token().await?;
        let reply = self.api.add_review_reply(id, content, &token).await?;
        Ok(Reply::from_own(reply))
    }
}
