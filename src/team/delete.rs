use crate::diagnostics::DiagnosticLog;
use crate::team::types::{DeleteTeamError, DeleteTeamVariables};
use crate::telemetry::TelemetryRecorder;
use std::future::Future;

pub const TELEMETRY_FEATURE: &str = "team";
pub const TELEMETRY_DELETE: &str = "delete";
pub const TELEMETRY_DELETE_FAIL: &str = "deleteFail";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeleteOutcome {
    Deleted,
    /// The API refused the request. The error is shown inline by the dialog.
    Rejected,
    /// The request failed locally. Logged and reported.
    Failed,
}

/// Runs the dialog's cancel action. Never reaches the API.
pub fn cancel_delete(team_id: &str, on_cancel: impl FnOnce()) {
    tracing::debug!(team_id, "team deletion cancelled");
    on_cancel();
}

/// Deletes `team_id` through `mutate` and reports the result.
///
/// API errors stay with the mutation state for inline display; only local
/// failures reach the diagnostic log and the `deleteFail` event. The returned
/// outcome is traced by the dialog.
pub async fn delete_team<M, Fut>(
    team_id: &str,
    mutate: M,
    telemetry: &dyn TelemetryRecorder,
    log: &dyn DiagnosticLog,
    after_delete: impl FnOnce(),
) -> DeleteOutcome
where
    M: FnOnce(DeleteTeamVariables) -> Fut,
    Fut: Future<Output = Result<(), DeleteTeamError>>,
{
    match mutate(DeleteTeamVariables::new(team_id)).await {
        Ok(()) => {
            telemetry.record_event(TELEMETRY_FEATURE, TELEMETRY_DELETE);
            after_delete();
            DeleteOutcome::Deleted
        }
        Err(DeleteTeamError::Api(e)) => {
            tracing::debug!(team_id, error = %e, "team deletion rejected by API");
            DeleteOutcome::Rejected
        }
        Err(e) => {
            log.error(&e);
            telemetry.record_event(TELEMETRY_FEATURE, TELEMETRY_DELETE_FAIL);
            DeleteOutcome::Failed
        }
    }
}
