use crate::audit::IncompleteFinding;
use crate::color::{GraphicalElement, PaintClassification};
use crate::error::ErrorPayload;
use serde::{Deserialize, Serialize};

/// Schema version for output payloads.
pub const BGPAINT_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum BgpaintOutput {
    Audit(AuditOutput),
    Classify(ClassifyOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutput {
    pub version: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub checked: usize,
    pub skipped: usize,
    /// True when no node has an indeterminate contrast background
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<AuditFinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub severity: FindingSeverity,
    #[serde(flatten)]
    pub detail: IncompleteFinding,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyOutput {
    pub version: String,
    pub tag: String,
    pub value: String,
    pub classification: PaintClassification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphical: Option<GraphicalElement>,
    /// Ledger value under `bgColor` after the check, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    pub complex: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaintSource;

    #[test]
    fn audit_output_serializes() {
        let output = BgpaintOutput::Audit(AuditOutput {
            version: BGPAINT_OUTPUT_VERSION.to_string(),
            input: "page.json".to_string(),
            url: Some("https://example.com".to_string()),
            checked: 3,
            skipped: 1,
            passed: false,
            findings: vec![AuditFinding {
                severity: FindingSeverity::Warning,
                detail: IncompleteFinding {
                    node_id: "hero".to_string(),
                    tag: "div".to_string(),
                    reason: "bgGradient".to_string(),
                    source: PaintSource::BackgroundImage,
                    layer: Some("linear-gradient(red, orange)".to_string()),
                },
                message: "contrast indeterminate".to_string(),
            }],
        });

        let json = serde_json::to_string(&output).expect("serialize audit output");
        assert!(json.contains("\"mode\":\"audit\""));
        assert!(json.contains("\"nodeId\":\"hero\""));
        assert!(json.contains("\"reason\":\"bgGradient\""));
        assert!(json.contains("\"source\":\"background-image\""));
        assert!(json.contains("\"severity\":\"warning\""));
    }

    #[test]
    fn classify_output_serializes() {
        let output = BgpaintOutput::Classify(ClassifyOutput {
            version: BGPAINT_OUTPUT_VERSION.to_string(),
            tag: "img".to_string(),
            value: "none".to_string(),
            classification: PaintClassification::Image,
            graphical: Some(GraphicalElement::Img),
            reason: Some("bgImage".to_string()),
            layer: None,
            complex: true,
        });

        let json = serde_json::to_string(&output).expect("serialize classify output");
        assert!(json.contains("\"mode\":\"classify\""));
        assert!(json.contains("\"classification\":\"image\""));
        assert!(json.contains("\"graphical\":\"img\""));
        assert!(!json.contains("\"layer\""));
    }
}
