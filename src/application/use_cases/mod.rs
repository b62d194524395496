pub mod batch_runner;
pub mod combiner;
pub mod tag_extraction;
