use std::io::{self, Write};

use tracing::{info, warn};

use super::bigquery::check_bigquery;
use super::gemini::check_gemini;
use super::pinecone::check_pinecone;
use super::report::Reporter;
use super::types::{CheckReport, Service, ValidationSummary};
use crate::config::Settings;
use crate::providers::ProviderFactory;

/// Runs the connectivity checks one after another against an explicitly
/// provided settings value.
pub struct Validator {
    settings: Settings,
    factory: Box<dyn ProviderFactory>,
}

impl Validator {
    pub fn new(settings: Settings, factory: Box<dyn ProviderFactory>) -> Self {
        Self { settings, factory }
    }

    pub async fn check(&self, service: Service) -> CheckReport {
        info!(service = %service, "Running connectivity check");
        let factory = self.factory.as_ref();
        let mut details = Vec::new();
        let outcome = match service {
            Service::BigQuery => check_bigquery(&self.settings.gcp, factory).await,
            Service::Pinecone => {
                check_pinecone(&self.settings.pinecone, factory, &mut details).await
            }
            Service::Gemini => check_gemini(&self.settings.gemini, factory).await,
        };
        if let Err(e) = &outcome {
            warn!(service = %service, error = %e, "Connectivity check failed");
        }
        CheckReport {
            service,
            details,
            outcome,
        }
    }

    /// Runs every check without printing anything.
    pub async fn run_checks(&self) -> ValidationSummary {
        let mut reports = Vec::with_capacity(Service::ALL.len());
        for service in Service::ALL {
            reports.push(self.check(service).await);
        }
        ValidationSummary { reports }
    }

    /// Runs every check, printing progress as each one completes and the
    /// summary at the end.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> io::Result<ValidationSummary> {
        reporter.banner()?;

        let mut reports = Vec::with_capacity(Service::ALL.len());
        for service in Service::ALL {
            reporter.testing(service)?;
            let report = self.check(service).await;
            reporter.check(&report)?;
            reports.push(report);
        }

        let summary = ValidationSummary { reports };
        reporter.summary(&summary)?;
        Ok(summary)
    }
}
