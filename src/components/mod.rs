pub mod notices;
pub mod review_card;
pub mod review_form;
pub mod review_stats;
pub mod reviews_list;
pub mod testimonials;
