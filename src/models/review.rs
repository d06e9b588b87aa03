// src/models/review.rs
use crate::utils::dates::display_date;
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

pub const CLIENT_ROLE: &str = "Client";
pub const FALLBACK_AUTHOR: &str = "Client";
pub const FREELANCER_AUTHOR: &str = "Freelancer";
pub const FREELANCER_INITIALS: &str = "F";
pub const OWN_REPLY_AUTHOR: &str = "You";
pub const OWN_REPLY_INITIALS: &str = "Y";

/// Review record exactly as the backend sends it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawReview {
    pub id: u64,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_avatar: Option<String>,
    pub rating: i64,
    // Optional fields below accept both an absent key and an explicit `null`.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub helpful_count: Option<u32>,
    #[serde(default)]
    pub replies: Option<Vec<RawReply>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawReply {
    pub id: u64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ReviewPage {
    #[serde(default)]
    pub results: Vec<RawReview>,
}

/// Response of the "helpful" endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpfulCount {
    pub helpful_count: u32,
}

/// Body of a new review submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub rating: u8,
    pub content: String,
}

/// Display model of a review.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub author_initials: String,
    pub role: String,
    pub rating: u8,
    pub content: String,
    pub date: String,
    pub helpful: u32,
    pub verified: bool,
    pub replies: Vec<Reply>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub author_initials: String,
    pub content: String,
    pub date: String,
}

impl Reply {
    /// An existing reply loaded with its review.
    pub fn from_freelancer(raw: RawReply) -> Self {
        Self::labelled(raw, FREELANCER_AUTHOR, FREELANCER_INITIALS)
    }

    /// A reply the current user just posted.
    pub fn from_own(raw: RawReply) -> Self {
        Self::labelled(raw, OWN_REPLY_AUTHOR, OWN_REPLY_INITIALS)
    }

    fn labelled(raw: RawReply, author: &str, initials: &str) -> Self {
        Self {
            id: raw.id.to_string(),
            author: author.to_string(),
            author_initials: initials.to_string(),
            date: display_date(raw.created_at.as_deref().unwrap_or_default()),
            content: raw.content.unwrap_or_default(),
        }
    }
}

impl From<RawReview> for Review {
    fn from(raw: RawReview) -> Self {
        let author = raw
            .client_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());
        let author_initials = raw
            .client_avatar
            .filter(|avatar| !avatar.trim().is_empty())
            .unwrap_or_else(|| initials(&author));

        Review {
            id: raw.id.to_string(),
            author_initials,
            author,
            role: CLIENT_ROLE.to_string(),
            rating: clamp_rating(raw.id, raw.rating),
            content: raw.content.unwrap_or_default(),
            date: display_date(raw.created_at.as_deref().unwrap_or_default()),
            helpful: raw.helpful_count.unwrap_or_default(),
            verified: true,
            replies: raw
                .replies
                .unwrap_or_default()
                .into_iter()
                .map(Reply::from_freelancer)
                .collect(),
        }
    }
}

/// First letter of each word, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn clamp_rating(review_id: u64, rating: i64) -> u8 {
    if !(1..=5).contains(&rating) {
        warn!("[REVIEWS] Review {} has out-of-range rating {}, clamping", review_id, rating);
    }
    rating.clamp(1, 5) as u8
}
