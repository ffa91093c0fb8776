pub mod celebrations;

pub use celebrations::{AnniversaryEntry, BirthdayEntry, CelebrationsRequest, CelebrationsResponse};
