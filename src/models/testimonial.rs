use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub content: String,
    pub rating: u8,          // 1-5 stars
    pub avatar: String,      // Glyph or initials shown in the avatar bubble
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub is_approved: bool,   // Set by moderation; only approved entries are shown
}

impl Testimonial {
    /// Number of filled stars to draw, whatever the backend sent.
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// `{results: [...]}` envelope returned by the testimonials endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TestimonialPage {
    #[serde(default)]
    pub results: Vec<Testimonial>,
}

impl TestimonialPage {
    /// Consumes the page, keeping moderated entries in their original order.
    pub fn into_approved(self) -> Vec<Testimonial> {
        self.results.into_iter().filter(|t| t.is_approved).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_approved_entries() {
        let page: TestimonialPage = serde_json::from_value(serde_json::json!({
            "results": [
                {"id": 1, "name": "Amina", "content": "Great", "rating": 5, "avatar": "A",
                 "created_at": "2024-01-01T00:00:00Z", "is_approved": true},
                {"id": 2, "name": "Brian", "content": "Okay", "rating": 3, "avatar": "B",
                 "created_at": "2024-01-02T00:00:00Z", "is_approved": false}
            ]
        }))
        .unwrap();

        let approved = page.into_approved();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, 1);
    }

    #[test]
    fn stars_stay_within_one_to_five() {
        let mut testimonial: Testimonial = serde_json::from_value(serde_json::json!(
            {"id": 4, "name": "D", "content": "x", "rating": 9, "avatar": "D"}
        ))
        .unwrap();
        assert_eq!(testimonial.stars(), 5);

        testimonial.rating = 0;
        assert_eq!(testimonial.stars(), 1);

        testimonial.rating = 4;
        assert_eq!(testimonial.stars(), 4);
    }

    #[test]
    fn missing_approval_flag_counts_as_unapproved() {
        let page: TestimonialPage = serde_json::from_value(serde_json::json!({
            "results": [{"id": 3, "name": "C", "content": "x", "rating": 4, "avatar": "C"}]
        }))
        .unwrap();
        assert!(page.into_approved().is_empty());
    }
}
