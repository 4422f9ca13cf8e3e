use std::io::{self, Write};

use super::types::{CheckReport, Service, ValidationSummary};

const RULE_WIDTH: usize = 60;
const TITLE: &str = "Yelp Hybrid Streaming Agentic Platform Connection Test";

/// Plain-text report written to the operator's terminal.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "  {text}")?;
        writeln!(self.out, "{rule}")
    }

    pub fn banner(&mut self) -> io::Result<()> {
        self.heading(TITLE)
    }

    pub fn testing(&mut self, service: Service) -> io::Result<()> {
        writeln!(self.out, "\nTesting {} connectivity......", service.label())
    }

    pub fn pass(&mut self, service: Service) -> io::Result<()> {
        writeln!(self.out, "----- PASS ----- [{}]", service)
    }

    pub fn fail(&mut self, service: Service, error: &str) -> io::Result<()> {
        writeln!(self.out, "xxxxx FAIL xxxxx [{}] : {}", service, error)
    }

    /// Detail lines followed by the PASS/FAIL marker for one check.
    pub fn check(&mut self, report: &CheckReport) -> io::Result<()> {
        for line in &report.details {
            writeln!(self.out, "{line}")?;
        }
        match &report.outcome {
            Ok(success) => {
                for line in success.details() {
                    writeln!(self.out, "{line}")?;
                }
                self.pass(report.service)
            }
            Err(failure) => self.fail(report.service, &failure.to_string()),
        }
    }

    pub fn summary(&mut self, summary: &ValidationSummary) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading("SUMMARY")?;

        for report in &summary.reports {
            if report.passed() {
                self.pass(report.service)?;
            } else {
                self.fail(report.service, "See details above")?;
            }
        }

        if summary.all_passed() {
            writeln!(self.out, "\n All services connected.")?;
        } else {
            writeln!(self.out, "\n Fix the FAIL(s).")?;
        }
        self.out.flush()
    }
}
