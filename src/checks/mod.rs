pub mod bigquery;
pub mod gemini;
pub mod pinecone;
pub mod report;
pub mod runner;
pub mod types;

pub use report::Reporter;
pub use runner::Validator;
pub use types::{CheckFailure, CheckOutcome, CheckReport, CheckSuccess, Service, ValidationSummary};
