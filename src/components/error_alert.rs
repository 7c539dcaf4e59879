use crate::team::DeleteTeamError;
use dioxus::prelude::*;

pub fn alert_lines(error: &DeleteTeamError) -> Vec<String> {
    match error {
        DeleteTeamError::Api(api) if !api.errors.is_empty() => {
            api.errors.iter().map(|e| e.message.clone()).collect()
        }
        other => vec![other.to_string()],
    }
}

#[component]
pub fn ErrorAlert(error: DeleteTeamError) -> Element {
    let lines = alert_lines(&error);

    rsx! {
        div { class: "message error", role: "alert",
            strong { "Error: " }
            for line in lines {
                span { class: "error-line", "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::types::{ApiError, GraphQlError};

    #[test]
    fn test_api_errors_render_one_line_each() {
        let error = DeleteTeamError::Api(ApiError {
            errors: vec![GraphQlError::new("first"), GraphQlError::new("second")],
        });
        assert_eq!(alert_lines(&error), vec!["first", "second"]);
    }

    #[test]
    fn test_other_errors_render_display() {
        assert_eq!(
            alert_lines(&DeleteTeamError::unexpected("boom")),
            vec!["Unexpected error: boom"]
        );
        assert_eq!(
            alert_lines(&DeleteTeamError::Api(ApiError { errors: vec![] })),
            vec!["Unknown API error"]
        );
    }
}
