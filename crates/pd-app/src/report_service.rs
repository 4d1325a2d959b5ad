//! Remote report generation on behalf of the frontends.

use crate::error::AppResult;
use pd_hydraulics::{PumpSpec, SizingResult};
use pd_report::{build_report_prompt, GeneratedReport, ReportClient, ReportPhase};

/// One report-generation request.
pub struct ReportRequest<'a> {
    /// User-supplied API credential; never logged or persisted.
    pub credential: &'a str,
    pub spec: &'a PumpSpec,
    pub sizing: &'a SizingResult,
}

/// Build the prompt and run it through the remote service.
///
/// Blocks on network I/O; the UI calls this from a worker thread. Progress
/// phases are forwarded to `on_phase` when supplied.
pub fn generate_report(
    request: &ReportRequest<'_>,
    on_phase: Option<&mut dyn FnMut(ReportPhase)>,
) -> AppResult<GeneratedReport> {
    let client = ReportClient::new(request.credential)?;
    let prompt = build_report_prompt(request.spec, request.sizing);
    tracing::info!(
        flow_m3h = request.spec.flow_m3h,
        head_m = request.spec.head_m,
        "requesting compliance report"
    );
    let report = client.generate_report(&prompt, on_phase)?;
    tracing::info!(model = %report.model_id, chars = report.text.len(), "report generated");
    Ok(report)
}
