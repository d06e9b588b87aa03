pub mod review_list;
pub mod rotator;
pub mod stats;
