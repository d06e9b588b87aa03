pub mod freelancer_reviews;
