mod config;
mod corpus;
mod descriptors;
mod pipeline;
mod quiz;
mod similarity;

pub use config::files_handling;
pub use corpus::Corpus;
pub use descriptors::{Descriptor, SemanticDescriptors};
pub use pipeline::Pipeline;
pub use quiz::{Quiz, QuizReport};
pub use similarity::{cosine_similarity, guarded_similarity, most_similar, norm, Score};
