//! Lint result aggregation and console rendering.
//!
//! Checkers hand their findings to a `LintReport`, which classifies their
//! severity and decides the pass/fail verdict under the escalation flags.

use colored::Colorize;
use std::path::PathBuf;

use crate::schema::SchemaViolation;

/// All findings of one lint run.
#[derive(Debug, Default)]
pub struct LintReport {
    /// Files that failed to parse as YAML at all (error).
    pub yaml_errors: Vec<String>,
    /// Structural schema violations (error).
    pub schema_violations: Vec<SchemaViolation>,
    /// Playbook paths referenced by jobs that do not exist (error).
    pub invalid_playbook_paths: Vec<String>,
    /// Semaphores declared at both job and run-phase level (error).
    pub duplicate_semaphores: Vec<String>,
    /// Job names declared in more than one file (warning).
    pub duplicate_jobs: Vec<String>,
    /// Nodeset names referenced but never declared (warning).
    pub dangling_nodesets: Vec<String>,
    /// Secret names referenced but never declared (warning).
    pub dangling_secrets: Vec<String>,
    /// Files with the suspect `.yml` extension (warning).
    pub suspect_files: Vec<PathBuf>,
    /// Whether playbook path checking ran this time.
    pub playbook_paths_checked: bool,
}

impl LintReport {
    pub fn error_count(&self) -> usize {
        self.yaml_errors.len()
            + self.schema_violations.len()
            + self.invalid_playbook_paths.len()
            + self.duplicate_semaphores.len()
    }

    pub fn warning_count(&self) -> usize {
        self.duplicate_jobs.len()
            + self.dangling_nodesets.len()
            + self.dangling_secrets.len()
            + self.suspect_files.len()
    }

    /// Whether the run passes under the given escalation policy.
    pub fn passed(&self, warnings_as_errors: bool) -> bool {
        let mut total = self.error_count();
        if warnings_as_errors {
            total += self.warning_count();
        }
        total == 0
    }

    /// Render the full report to stdout.
    pub fn render(&self, warnings_as_errors: bool, ignore_warnings: bool) {
        self.render_errors();

        // --warnings-as-errors has precedence over --ignore-warnings.
        if warnings_as_errors {
            self.render_warnings("error");
        } else if !ignore_warnings {
            self.render_warnings("warning");
        }

        self.render_summary(warnings_as_errors);
    }

    fn render_errors(&self) {
        if !self.yaml_errors.is_empty() {
            println!("\n{}", "YAML parse errors:".red().bold());
            for message in &self.yaml_errors {
                println!("  {} {message}", "✗".red());
            }
        }

        if !self.schema_violations.is_empty() {
            println!("\n{}", "Schema validation errors:".red().bold());
            for violation in &self.schema_violations {
                println!("  {} {}", "✗".red(), violation.file.display());
                println!("    {}", violation.message);
                println!(
                    "    {}",
                    format!(
                        "path: {}  schema: {}",
                        violation.instance_path, violation.schema_path
                    )
                    .dimmed()
                );
            }
        }

        if self.playbook_paths_checked {
            if self.invalid_playbook_paths.is_empty() {
                println!("\nNo invalid playbook paths");
            } else {
                println!("\n{}", "Invalid playbook paths:".red().bold());
                for path in &self.invalid_playbook_paths {
                    println!("  {} {path}", "✗".red());
                }
            }
        }

        if !self.duplicate_semaphores.is_empty() {
            println!("\n{}", "Duplicate semaphores:".red().bold());
            for name in &self.duplicate_semaphores {
                println!("  {} {name}", "✗".red());
            }
        }
    }

    fn render_warnings(&self, severity: &str) {
        if self.warning_count() == 0 {
            return;
        }

        let paint = |text: String| {
            if severity == "error" {
                text.red().bold()
            } else {
                text.yellow().bold()
            }
        };

        if !self.suspect_files.is_empty() {
            println!(
                "\n{}",
                paint(format!(
                    "Found {} file(s) with '.yml' extension:",
                    self.suspect_files.len()
                ))
            );
            for file in &self.suspect_files {
                println!("  {} {}", "⚠".yellow(), file.display());
            }
        }

        if !self.duplicate_jobs.is_empty() {
            println!(
                "\n{}",
                paint(format!(
                    "Found {} duplicate job(s):",
                    self.duplicate_jobs.len()
                ))
            );
            for name in &self.duplicate_jobs {
                println!("  {} {name}", "⚠".yellow());
            }
        }

        if !self.dangling_nodesets.is_empty() {
            println!(
                "\n{}",
                paint(format!(
                    "Found {} inexistent nodeset(s):",
                    self.dangling_nodesets.len()
                ))
            );
            for name in &self.dangling_nodesets {
                println!("  {} {name}", "⚠".yellow());
            }
        }

        if !self.dangling_secrets.is_empty() {
            println!(
                "\n{}",
                paint(format!(
                    "Found {} inexistent secret(s):",
                    self.dangling_secrets.len()
                ))
            );
            for name in &self.dangling_secrets {
                println!("  {} {name}", "⚠".yellow());
            }
        }
    }

    fn render_summary(&self, warnings_as_errors: bool) {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if self.passed(warnings_as_errors) {
            println!("\n{} Passed", "✓".green().bold());
            if warnings > 0 {
                println!("Total warnings: {warnings}");
            }
            return;
        }

        let total = if warnings_as_errors {
            errors + warnings
        } else {
            errors
        };
        println!("\n{} Failed", "✗".red().bold());
        println!("Total errors: {total}");
        if !self.yaml_errors.is_empty() || !self.schema_violations.is_empty() {
            println!(
                "  Validation errors: {}",
                self.yaml_errors.len() + self.schema_violations.len()
            );
        }
        if !self.invalid_playbook_paths.is_empty() {
            println!(
                "  Playbook path errors: {}",
                self.invalid_playbook_paths.len()
            );
        }
        if !self.duplicate_semaphores.is_empty() {
            println!("  Duplicated semaphores: {}", self.duplicate_semaphores.len());
        }
        if warnings_as_errors && warnings > 0 {
            println!("  Warnings treated as errors: {warnings}");
        }
    }
}
