use std::path::PathBuf;
use std::process::ExitCode;

use bgpaint_lib::output::BGPAINT_OUTPUT_VERSION;
use bgpaint_lib::{
    check_background, BgpaintError, BgpaintOutput, ClassifyOutput, IncompleteData,
    IncompleteDataLedger, StyledElement, BACKGROUND_IMAGE, BG_COLOR,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Run the classify command against a synthetic element.
pub fn run_classify(
    value: String,
    tag: String,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    if tag.trim().is_empty() {
        return render_error(
            BgpaintError::Config("--tag must not be empty".to_string()),
            format,
            output,
        );
    }
    let body = BgpaintOutput::Classify(classify_value(&tag, &value));
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(BgpaintError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

fn classify_value(tag: &str, value: &str) -> ClassifyOutput {
    let element = StyledElement::new(tag).with_property(BACKGROUND_IMAGE, value);
    let mut ledger = IncompleteDataLedger::new();
    let assessment = check_background(&element, &mut ledger);
    ClassifyOutput {
        version: BGPAINT_OUTPUT_VERSION.to_string(),
        tag: tag.to_string(),
        value: value.to_string(),
        classification: assessment.classification,
        graphical: assessment.graphical,
        reason: ledger.get(BG_COLOR).map(str::to_string),
        complex: assessment.is_complex(),
        layer: assessment.layer,
    }
}
