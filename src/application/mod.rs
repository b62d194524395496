pub mod use_cases;

pub use use_cases::batch_runner::BatchRunner;
pub use use_cases::tag_extraction::TagExtractor;
