use std::path::PathBuf;
use std::process::ExitCode;

use bgpaint_lib::config::validate_selector;
use bgpaint_lib::output::BGPAINT_OUTPUT_VERSION;
use bgpaint_lib::{
    load_snapshot, run_audit, AuditFinding, AuditOutput, BgpaintError, BgpaintOutput,
    FindingSeverity, IncompleteFinding, PaintSource,
};

use crate::cli::OutputFormat;
use crate::formatting::{exit_code_for_audit, render_error, write_output};
use crate::settings::{
    format_effective_settings, load_config, resolve_audit_settings, AuditFlagSources,
};

/// Run the audit command.
#[allow(clippy::too_many_arguments)]
pub fn run_audit_command(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    input: PathBuf,
    ignore_selectors: Option<String>,
    include_hidden: bool,
    text_only: bool,
    fail_on_incomplete: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let flags = AuditFlagSources::from_args(raw_args);
    let settings = resolve_audit_settings(
        ignore_selectors.as_deref(),
        include_hidden,
        text_only,
        fail_on_incomplete,
        &config,
        &flags,
    );
    if let Some(bad) = settings
        .options
        .ignore_selectors
        .iter()
        .find(|sel| validate_selector(sel).is_err())
    {
        return render_error(
            BgpaintError::Config(format!("Invalid ignore selector '{bad}'")),
            format,
            output,
        );
    }
    tracing::info!(
        "{}",
        format_effective_settings(&settings, config_path.as_deref())
    );

    tracing::info!(input = %input.display(), "loading DOM snapshot");
    let snapshot = match load_snapshot(&input) {
        Ok(snapshot) => snapshot,
        Err(err) => return render_error(err.into(), format, output),
    };

    let report = match run_audit(&snapshot, &settings.options) {
        Ok(report) => report,
        Err(err) => return render_error(err, format, output),
    };

    let has_findings = report.has_findings();
    let body = BgpaintOutput::Audit(AuditOutput {
        version: BGPAINT_OUTPUT_VERSION.to_string(),
        input: input.display().to_string(),
        url: snapshot.url.clone(),
        checked: report.checked,
        skipped: report.skipped,
        passed: !has_findings,
        findings: report
            .findings
            .into_iter()
            .map(|detail| to_audit_finding(detail, settings.fail_on_incomplete))
            .collect(),
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(BgpaintError::Config(err.to_string()), format, output);
    }
    exit_code_for_audit(has_findings, settings.fail_on_incomplete)
}

fn to_audit_finding(detail: IncompleteFinding, fail_on_incomplete: bool) -> AuditFinding {
    let severity = if fail_on_incomplete {
        FindingSeverity::Error
    } else {
        FindingSeverity::Warning
    };
    let message = match (detail.source, detail.layer.as_deref()) {
        (PaintSource::GraphicalElement, _) => format!(
            "<{}> renders graphical content; contrast against its background cannot be computed",
            detail.tag
        ),
        (PaintSource::BackgroundImage, Some(layer)) => format!(
            "Background layer {layer} paints behind the content; report contrast as indeterminate"
        ),
        (PaintSource::BackgroundImage, None) => {
            "Complex background paint; report contrast as indeterminate".to_string()
        }
    };
    AuditFinding {
        severity,
        detail,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(source: PaintSource, layer: Option<&str>) -> IncompleteFinding {
        IncompleteFinding {
            node_id: "n1".into(),
            tag: "canvas".into(),
            reason: "bgImage".into(),
            source,
            layer: layer.map(str::to_string),
        }
    }

    #[test]
    fn severity_escalates_when_failing_on_incomplete() {
        let warn = to_audit_finding(finding(PaintSource::GraphicalElement, None), false);
        assert_eq!(warn.severity, FindingSeverity::Warning);
        let err = to_audit_finding(finding(PaintSource::GraphicalElement, None), true);
        assert_eq!(err.severity, FindingSeverity::Error);
    }

    #[test]
    fn message_names_the_deciding_layer() {
        let out = to_audit_finding(
            finding(PaintSource::BackgroundImage, Some("url(london.png)")),
            false,
        );
        assert!(out.message.contains("url(london.png)"));
        assert_eq!(out.detail.reason, "bgImage");
    }
}
