use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bgpaint_lib::output::BGPAINT_OUTPUT_VERSION;
use bgpaint_lib::{BgpaintError, BgpaintOutput, ErrorOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &BgpaintOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: BgpaintError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    tracing::error!(error = %err, "bgpaint failed");
    let error_payload = err.to_payload();
    let payload = BgpaintOutput::Error(ErrorOutput {
        version: BGPAINT_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Reserve exit code 2 for fatal/errors; incomplete findings use 1.
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &BgpaintOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &BgpaintOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content = serde_json::to_string_pretty(body)
        .unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &BgpaintOutput, colorize: bool) -> String {
    match body {
        BgpaintOutput::Audit(out) => {
            let mut buf = String::new();
            let status = if out.passed { "PASS" } else { "INCOMPLETE" };
            let status_colored = color(status, if out.passed { "32" } else { "33" }, colorize);
            writeln!(buf, "{} Background paint audit", status_colored).ok();
            writeln!(buf, "Input: {}", out.input).ok();
            if let Some(url) = &out.url {
                writeln!(buf, "Page: {url}").ok();
            }
            writeln!(
                buf,
                "Checked: {} (skipped {}), indeterminate: {}",
                out.checked,
                out.skipped,
                out.findings.len()
            )
            .ok();
            if !out.findings.is_empty() {
                writeln!(buf, "Findings:").ok();
                for finding in &out.findings {
                    let reason = color(&finding.detail.reason, "33", colorize);
                    writeln!(
                        buf,
                        "- [{}] <{}> #{}: {}",
                        reason, finding.detail.tag, finding.detail.node_id, finding.message
                    )
                    .ok();
                }
            }
            buf
        }
        BgpaintOutput::Classify(out) => {
            let mut buf = String::new();
            let header = color("[CLASSIFY]", "36", colorize);
            writeln!(buf, "{} <{}> {}", header, out.tag, out.classification).ok();
            writeln!(buf, "Value: {}", out.value).ok();
            if let Some(kind) = out.graphical {
                writeln!(buf, "Graphical element: {kind} (styles not inspected)").ok();
            }
            if let Some(layer) = &out.layer {
                writeln!(buf, "Deciding layer: {layer}").ok();
            }
            match &out.reason {
                Some(reason) => writeln!(buf, "Ledger: bgColor = {reason}").ok(),
                None => writeln!(buf, "Ledger: unchanged").ok(),
            };
            buf
        }
        BgpaintOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or(out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Determine exit code for the audit command.
pub fn exit_code_for_audit(has_findings: bool, fail_on_incomplete: bool) -> ExitCode {
    if has_findings && fail_on_incomplete {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bgpaint_lib::output::{AuditFinding, AuditOutput, ClassifyOutput, FindingSeverity};
    use bgpaint_lib::{GraphicalElement, IncompleteFinding, PaintClassification, PaintSource};

    #[test]
    fn exit_code_for_audit_only_fails_when_requested() {
        assert_eq!(exit_code_for_audit(false, true), ExitCode::SUCCESS);
        assert_eq!(exit_code_for_audit(true, false), ExitCode::SUCCESS);
        assert_eq!(exit_code_for_audit(true, true), ExitCode::from(1));
    }

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let code = render_error(
            BgpaintError::Config("boom".to_string()),
            OutputFormat::Json,
            None,
        );
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn format_pretty_lists_audit_findings() {
        let output = BgpaintOutput::Audit(AuditOutput {
            version: BGPAINT_OUTPUT_VERSION.to_string(),
            input: "page.json".into(),
            url: Some("https://example.com".into()),
            checked: 4,
            skipped: 1,
            passed: false,
            findings: vec![AuditFinding {
                severity: FindingSeverity::Warning,
                detail: IncompleteFinding {
                    node_id: "hero".into(),
                    tag: "section".into(),
                    reason: "bgGradient".into(),
                    source: PaintSource::BackgroundImage,
                    layer: Some("linear-gradient(red, orange)".into()),
                },
                message: "gradient background".into(),
            }],
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("INCOMPLETE Background paint audit"));
        assert!(pretty.contains("Checked: 4 (skipped 1), indeterminate: 1"));
        assert!(pretty.contains("[bgGradient] <section> #hero"));
    }

    #[test]
    fn format_pretty_passes_clean_audit() {
        let output = BgpaintOutput::Audit(AuditOutput {
            version: BGPAINT_OUTPUT_VERSION.to_string(),
            input: "page.json".into(),
            url: None,
            checked: 2,
            skipped: 0,
            passed: true,
            findings: vec![],
        });
        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("PASS Background paint audit"));
        assert!(!pretty.contains("Findings:"));
    }

    #[test]
    fn format_pretty_describes_classification() {
        let output = BgpaintOutput::Classify(ClassifyOutput {
            version: BGPAINT_OUTPUT_VERSION.to_string(),
            tag: "svg".into(),
            value: "none".into(),
            classification: PaintClassification::Image,
            graphical: Some(GraphicalElement::Svg),
            reason: Some("bgImage".into()),
            layer: None,
            complex: true,
        });
        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("[CLASSIFY] <svg> image"));
        assert!(pretty.contains("Graphical element: svg"));
        assert!(pretty.contains("Ledger: bgColor = bgImage"));
    }

    #[test]
    fn format_pretty_handles_errors() {
        let output = BgpaintOutput::Error(ErrorOutput {
            version: BGPAINT_OUTPUT_VERSION.to_string(),
            message: Some("bad input".to_string()),
            error: bgpaint_lib::error::ErrorPayload {
                category: bgpaint_lib::error::ErrorCategory::Config,
                message: "bad input".to_string(),
                remediation: Some("check flags".to_string()),
            },
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("[ERROR] bad input"));
        assert!(pretty.contains("Hint: check flags"));
    }
}
