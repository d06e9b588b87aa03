pub mod review;
pub mod testimonial;
