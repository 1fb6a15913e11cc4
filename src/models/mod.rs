mod aggregate;
mod question;

pub use aggregate::{capitalize, CategoryCount, DifficultyCount};
pub use question::{QuestionPayload, QuestionRecord, RawQuestion};
