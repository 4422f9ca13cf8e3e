use std::fmt;

use thiserror::Error;

use crate::providers::ProviderError;
use crate::providers::pinecone::IndexStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    BigQuery,
    Pinecone,
    Gemini,
}

impl Service {
    /// Order in which the checks run and are summarised.
    pub const ALL: [Service; 3] = [Service::BigQuery, Service::Pinecone, Service::Gemini];

    pub fn name(&self) -> &'static str {
        match self {
            Service::BigQuery => "BigQuery",
            Service::Pinecone => "Pinecone",
            Service::Gemini => "Gemini",
        }
    }

    /// Label used in the "Testing ..." progress line.
    pub fn label(&self) -> &'static str {
        match self {
            Service::Gemini => "Gemini API",
            other => other.name(),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single connectivity check failed. Every variant is terminal for its
/// service and harmless for the others.
#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("{variable} is not set in .env")]
    ConfigMissing { variable: &'static str },

    #[error("{0}")]
    ResourceMissing(String),

    #[error(transparent)]
    CallFailed(#[from] ProviderError),
}

/// What a passing check learned about its service.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckSuccess {
    Warehouse {
        datasets: Vec<String>,
    },
    VectorIndex {
        index: String,
        stats: IndexStats,
    },
    LanguageModel {
        reply: String,
    },
}

impl CheckSuccess {
    pub fn details(&self) -> Vec<String> {
        match self {
            CheckSuccess::Warehouse { datasets } => vec![format!(
                "Found {} dataset(s): {}",
                datasets.len(),
                format_names(datasets)
            )],
            CheckSuccess::VectorIndex { index, stats } => vec![format!(
                "Index '{}' stats: total_vector_count={}, dimension={}",
                index, stats.total_vector_count, stats.dimension
            )],
            CheckSuccess::LanguageModel { reply } => vec![format!("Gemini response: '{}'", reply)],
        }
    }
}

pub type CheckOutcome = Result<CheckSuccess, CheckFailure>;

#[derive(Debug)]
pub struct CheckReport {
    pub service: Service,
    /// Progress lines gathered while the check ran, reported ahead of the
    /// outcome whether it passed or not.
    pub details: Vec<String>,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct ValidationSummary {
    pub reports: Vec<CheckReport>,
}

impl ValidationSummary {
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(CheckReport::passed)
    }

    pub fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }

    pub fn report(&self, service: Service) -> Option<&CheckReport> {
        self.reports.iter().find(|r| r.service == service)
    }
}

/// Renders names as a bracketed, quoted list: `['a', 'b']`.
pub fn format_names(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}
