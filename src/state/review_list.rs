//! Reconciliation of review mutations into the panel's list.
//!
//! Every function returns a fresh `Vec` in which at most one entry is a new
//! allocation; untouched reviews are the same `Rc` as before, so keyed
//! rendering only redraws the changed card.

use crate::models::review::{Reply, Review};
use std::rc::Rc;

pub type ReviewList = Vec<Rc<Review>>;

/// Wraps freshly normalized reviews for storage in the panel.
pub fn from_reviews(reviews: impl IntoIterator<Item = Review>) -> ReviewList {
    reviews.into_iter().map(Rc::new).collect()
}

/// Puts a just-created review at the top of the list.
pub fn prepend(list: &[Rc<Review>], review: Review) -> ReviewList {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.push(Rc::new(review));
    next.extend(list.iter().cloned());
    next
}

/// Sets the helpful count of `review_id` to the server-confirmed value.
pub fn with_helpful_count(list: &[Rc<Review>], review_id: &str, helpful: u32) -> ReviewList {
    replace_where(list, review_id, |review| review.helpful = helpful)
}

/// Appends `reply` after the existing replies of `review_id`.
pub fn with_reply(list: &[Rc<Review>], review_id: &str, reply: Reply) -> ReviewList {
    let mut reply = Some(reply);
    replace_where(list, review_id, |review| {
        if let Some(reply) = reply.take() {
            review.replies.push(reply);
        }
    })
}

fn replace_where<F>(list: &[Rc<Review>], review_id: &str, mut edit: F) -> ReviewList
where
    F: FnMut(&mut Review),
{
    list.iter()
        .map(|review| {
            if review.id == review_id {
                let mut updated = Review::clone(review);
                edit(&mut updated);
                Rc::new(updated)
            } else {
                Rc::clone(review)
            }
        })
        .collect()
}
