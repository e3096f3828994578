//! Audit traversal over a DOM snapshot.
//!
//! One run owns one incomplete-data ledger. Each checked node goes through the
//! background classifier; when it reports a complex paint, the reason is read
//! back from the ledger and attached to a finding verbatim.

use serde::{Deserialize, Serialize};

use crate::color::{check_background, IncompleteData, IncompleteDataLedger, PaintSource, BG_COLOR};
use crate::error::{BgpaintError, Result};
use crate::types::{DomNode, DomSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Lower-cased `#id`, `.class` or tag selectors
    pub ignore_selectors: Vec<String>,
    pub skip_hidden: bool,
    pub text_only: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            ignore_selectors: Vec::new(),
            skip_hidden: true,
            text_only: false,
        }
    }
}

/// A node whose contrast result must be reported as indeterminate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncompleteFinding {
    pub node_id: String,
    pub tag: String,
    /// Ledger value under `bgColor`, as written
    pub reason: String,
    pub source: PaintSource,
    /// Deciding background layer, for CSS-detected paints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub checked: usize,
    pub skipped: usize,
    #[serde(default)]
    pub findings: Vec<IncompleteFinding>,
}

impl AuditReport {
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Human-readable lines, one per finding.
    pub fn summary_lines(&self) -> Vec<String> {
        self.findings
            .iter()
            .map(|f| match &f.layer {
                Some(layer) => format!(
                    "<{}> #{}: contrast indeterminate ({}) from background layer {}",
                    f.tag, f.node_id, f.reason, layer
                ),
                None => format!(
                    "<{}> #{}: contrast indeterminate ({}) for graphical element",
                    f.tag, f.node_id, f.reason
                ),
            })
            .collect()
    }
}

/// Parse ignore selectors from a comma-separated string.
pub fn parse_ignore_selectors(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .filter_map(|part| {
                let trimmed = part.trim().to_ascii_lowercase();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Run an audit with a fresh ledger.
pub fn run_audit(snapshot: &DomSnapshot, options: &AuditOptions) -> Result<AuditReport> {
    let mut ledger = IncompleteDataLedger::new();
    run_audit_with(snapshot, options, &mut ledger)
}

/// Run an audit writing into a caller-provided ledger.
///
/// The ledger is used as given; resetting it between runs is up to the caller.
pub fn run_audit_with<L>(
    snapshot: &DomSnapshot,
    options: &AuditOptions,
    incomplete: &mut L,
) -> Result<AuditReport>
where
    L: IncompleteData + ?Sized,
{
    let mut report = AuditReport::default();

    for node in &snapshot.nodes {
        if should_skip(node, options) {
            report.skipped += 1;
            continue;
        }
        if node.tag.trim().is_empty() {
            return Err(BgpaintError::audit(format!(
                "node '{}' has no tag name",
                node.id
            )));
        }

        report.checked += 1;
        let assessment = check_background(node, incomplete);
        let Some(source) = assessment.source() else {
            continue;
        };
        let reason = incomplete.get(BG_COLOR).ok_or_else(|| {
            BgpaintError::audit(format!(
                "ledger has no {BG_COLOR} entry after node '{}' was flagged",
                node.id
            ))
        })?;
        report.findings.push(IncompleteFinding {
            node_id: node.id.clone(),
            tag: node.tag.clone(),
            reason: reason.to_string(),
            source,
            layer: assessment.layer,
        });
    }

    tracing::info!(
        url = snapshot.url.as_deref().unwrap_or("-"),
        checked = report.checked,
        skipped = report.skipped,
        findings = report.findings.len(),
        "background audit finished"
    );
    Ok(report)
}

fn should_skip(node: &DomNode, options: &AuditOptions) -> bool {
    if matches_any_selector(node, &options.ignore_selectors) {
        tracing::trace!(node = %node.id, "ignored by selector");
        return true;
    }
    if options.skip_hidden && node.is_hidden() {
        return true;
    }
    options.text_only && !node.has_text()
}

fn matches_any_selector(node: &DomNode, selectors: &[String]) -> bool {
    selectors.iter().any(|sel| selector_matches(node, sel))
}

fn selector_matches(node: &DomNode, selector: &str) -> bool {
    if let Some(id) = selector.strip_prefix('#') {
        let attr_id = node.attributes.get("id").map(String::as_str).unwrap_or_default();
        return attr_id.eq_ignore_ascii_case(id) || node.id.eq_ignore_ascii_case(id);
    }

    if let Some(class) = selector.strip_prefix('.') {
        return node
            .attributes
            .get("class")
            .is_some_and(|attr| attr.split_whitespace().any(|c| c.eq_ignore_ascii_case(class)));
    }

    node.tag.eq_ignore_ascii_case(selector)
}
