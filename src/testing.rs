//! In-memory stand-ins for the API and the identity provider.

use crate::api::MarketplaceApi;
use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::models::review::{HelpfulCount, NewReview, RawReply, RawReview, ReviewPage};
use crate::models::testimonial::{Testimonial, TestimonialPage};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

pub fn raw_review(id: u64, rating: i64) -> RawReview {
    RawReview {
        id,
        client_name: Some("Achieng Otieno".into()),
        client_avatar: Some("AO".into()),
        rating,
        content: Some("Great collaboration from start to finish.".into()),
        created_at: Some("2024-04-10T09:00:00Z".into()),
        helpful_count: Some(0),
        replies: Some(Vec::new()),
    }
}

pub fn testimonial(id: u64, rating: u8, is_approved: bool) -> Testimonial {
    Testimonial {
        id,
        name: format!("Member {id}"),
        content: "Found a great designer within a day.".into(),
        rating,
        avatar: "M".into(),
        created_at: "2024-01-01T00:00:00Z".into(),
        is_approved,
    }
}

/// Records every call and answers from canned values.
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<String>>,
    failure: RefCell<Option<ApiError>>,
    testimonials: RefCell<Vec<Testimonial>>,
    reviews: RefCell<Vec<RawReview>>,
    created: RefCell<Option<RawReview>>,
    helpful: Cell<u32>,
    reply_id: Cell<u64>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn fail_with(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub fn set_testimonials(&self, testimonials: Vec<Testimonial>) {
        *self.testimonials.borrow_mut() = testimonials;
    }

    pub fn set_reviews(&self, reviews: Vec<RawReview>) {
        *self.reviews.borrow_mut() = reviews;
    }

    pub fn set_created(&self, review: RawReview) {
        *self.created.borrow_mut() = Some(review);
    }

    pub fn set_helpful(&self, count: u32) {
        self.helpful.set(count);
    }

    pub fn set_reply_id(&self, id: u64) {
        self.reply_id.set(id);
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for FakeApi {
    async fn fetch_testimonials(&self) -> Result<TestimonialPage, ApiError> {
        self.record("fetch_testimonials".into())?;
        Ok(TestimonialPage {
            results: self.testimonials.borrow().clone(),
        })
    }

    async fn fetch_reviews_by_freelancer(&self, freelancer_id: u64) -> Result<ReviewPage, ApiError> {
        self.record(format!("fetch_reviews_by_freelancer({freelancer_id})"))?;
        Ok(ReviewPage {
            results: self.reviews.borrow().clone(),
        })
    }

    async fn create_review(
        &self,
        freelancer_id: u64,
        review: &NewReview,
        token: &str,
    ) -> Result<RawReview, ApiError> {
        self.record(format!(
            "create_review({freelancer_id}, {}, {}, {token})",
            review.rating, review.content
        ))?;
        self.created
            .borrow()
            .clone()
            .ok_or_else(|| ApiError::Decode("no canned review".into()))
    }

    async fn mark_review_helpful(&self, review_id: u64, token: &str) -> Result<HelpfulCount, ApiError> {
        self.record(format!("mark_review_helpful({review_id}, {token})"))?;
        Ok(HelpfulCount {
            helpful_count: self.helpful.get(),
        })
    }

    async fn add_review_reply(&self, review_id: u64, content: &str, token: &str) -> Result<RawReply, ApiError> {
        self.record(format!("add_review_reply({review_id}, {content}, {token})"))?;
        Ok(RawReply {
            id: self.reply_id.get(),
            content: Some(content.to_string()),
            created_at: Some("2024-04-11T09:00:00Z".into()),
        })
    }
}

pub struct FakeTokens {
    token: Option<String>,
    requests: Cell<usize>,
    last_template: RefCell<Option<String>>,
}

impl FakeTokens {
    pub fn signed_in(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            requests: Cell::new(0),
            last_template: RefCell::new(None),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            token: None,
            requests: Cell::new(0),
            last_template: RefCell::new(None),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    pub fn last_template(&self) -> Option<String> {
        self.last_template.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TokenProvider for FakeTokens {
    async fn token(&self, template: &str) -> Result<String, ApiError> {
        self.requests.set(self.requests.get() + 1);
        *self.last_template.borrow_mut() = Some(template.to_string());
        self.token
            .clone()
            .ok_or_else(|| ApiError::Auth("no active session".into()))
    }
}
