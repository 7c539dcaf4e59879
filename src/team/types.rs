use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Id of the parent team, if this is a child team.
    #[serde(default)]
    pub parent_team: Option<String>,
    #[serde(default)]
    pub readonly: bool,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: None,
            parent_team: None,
            readonly: false,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_team = Some(parent_id.into());
        self
    }

    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DeleteTeamVariables {
    pub id: String,
}

impl DeleteTeamVariables {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<String>,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }

    pub fn at(mut self, path: &[&str]) -> Self {
        self.path = path.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Application-level failure reported by the API, as opposed to a local one.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("{}", join_messages(.errors))]
pub struct ApiError {
    pub errors: Vec<GraphQlError>,
}

impl ApiError {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![GraphQlError::new(message)],
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    if errors.is_empty() {
        return "Unknown API error".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum DeleteTeamError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DeleteTeamError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        DeleteTeamError::Unexpected(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_title_prefers_display_name() {
        let mut team = Team::new("T1", "platform");
        assert_eq!(team.title(), "platform");
        team.display_name = Some("Platform".to_string());
        assert_eq!(team.title(), "Platform");
    }

    #[test]
    fn test_variables_carry_only_the_id() {
        let json = serde_json::to_value(DeleteTeamVariables::new("T1")).expect("serializes");
        assert_eq!(json, serde_json::json!({ "id": "T1" }));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            errors: vec![
                GraphQlError::new("team not found").at(&["deleteTeam"]),
                GraphQlError::new("try again"),
            ],
        };
        assert_eq!(err.to_string(), "team not found; try again");
        assert_eq!(ApiError { errors: vec![] }.to_string(), "Unknown API error");
    }

    #[test]
    fn test_delete_error_classes() {
        let api: DeleteTeamError = ApiError::single("nope").into();
        assert!(matches!(api, DeleteTeamError::Api(_)));
        assert_eq!(api.to_string(), "nope");

        let local = DeleteTeamError::unexpected("boom");
        assert!(matches!(local, DeleteTeamError::Unexpected(_)));
        assert_eq!(local.to_string(), "Unexpected error: boom");
    }

    #[test]
    fn test_team_deserializes_with_defaults() {
        let team: Team =
            serde_json::from_str(r#"{"id":"T2","name":"infra"}"#).expect("valid team json");
        assert_eq!(team, Team::new("T2", "infra"));
    }
}
