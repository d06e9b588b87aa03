use crate::models::review::Review;
use std::ops::Deref;

/// Aggregates shown next to the review list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReviewStats {
    pub total: usize,
    pub average: f64,
    // Index 0 holds 1-star counts, index 4 holds 5-star counts.
    distribution: [usize; 5],
}

impl ReviewStats {
    pub fn from_reviews<R>(reviews: &[R]) -> Self
    where
        R: Deref<Target = Review>,
    {
        let mut distribution = [0usize; 5];
        let mut sum = 0u64;

        for review in reviews {
            sum += u64::from(review.rating);
            if let Some(slot) = star_slot(review.rating) {
                distribution[slot] += 1;
            }
        }

        let total = reviews.len();
        let average = if total == 0 { 0.0 } else { sum as f64 / total as f64 };

        Self {
            total,
            average,
            distribution,
        }
    }

    /// Number of reviews with exactly `stars` stars; 0 outside 1-5.
    pub fn count_for(&self, stars: u8) -> usize {
        star_slot(stars).map_or(0, |slot| self.distribution[slot])
    }

    /// Share of reviews with `stars` stars, in percent.
    pub fn percent_for(&self, stars: u8) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count_for(stars) as f64 * 100.0 / self.total as f64
        }
    }
}

fn star_slot(stars: u8) -> Option<usize> {
    (1..=5).contains(&stars).then(|| usize::from(stars) - 1)
}
