use crate::team::backend::{Result, TeamsApi};
use crate::team::types::{ApiError, DeleteTeamError, DeleteTeamVariables, GraphQlError, Team};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

/// In-process team directory used by the desktop host.
#[derive(Clone)]
pub struct InMemoryTeams {
    teams: Rc<RefCell<Vec<Team>>>,
    latency: Duration,
}

impl InMemoryTeams {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams: Rc::new(RefCell::new(teams)),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn teams(&self) -> Vec<Team> {
        self.teams.borrow().clone()
    }

    fn remove_cascading(&self, id: &str) -> Result<usize> {
        let mut teams = self
            .teams
            .try_borrow_mut()
            .map_err(|e| DeleteTeamError::unexpected(format!("team directory unavailable: {}", e)))?;

        let team = teams.iter().find(|t| t.id == id).ok_or_else(|| {
            ApiError {
                errors: vec![GraphQlError::new("team not found").at(&["deleteTeam"])],
            }
        })?;
        if team.readonly {
            return Err(
                ApiError::single(format!("cannot delete read-only team {}", team.name)).into(),
            );
        }

        let mut doomed = HashSet::from([id.to_string()]);
        loop {
            let before = doomed.len();
            for t in teams.iter() {
                if let Some(parent) = &t.parent_team
                    && doomed.contains(parent)
                {
                    doomed.insert(t.id.clone());
                }
            }
            if doomed.len() == before {
                break;
            }
        }

        teams.retain(|t| !doomed.contains(&t.id));
        Ok(doomed.len())
    }
}

#[async_trait(?Send)]
impl TeamsApi for InMemoryTeams {
    async fn delete_team(&self, variables: DeleteTeamVariables) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let removed = self.remove_cascading(&variables.id)?;
        tracing::info!(team_id = %variables.id, removed, "team deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> InMemoryTeams {
        let mut locked = Team::new("T5", "billing");
        locked.readonly = true;
        InMemoryTeams::new(vec![
            Team::new("T1", "platform"),
            Team::new("T2", "search").with_parent("T1"),
            Team::new("T3", "ranking").with_parent("T2"),
            Team::new("T4", "security"),
            locked,
        ])
    }

    fn ids(teams: &InMemoryTeams) -> Vec<String> {
        teams.teams().into_iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn test_delete_cascades_to_descendants() {
        let teams = directory();

        teams
            .delete_team(DeleteTeamVariables::new("T1"))
            .await
            .expect("delete should succeed");

        assert_eq!(ids(&teams), vec!["T4", "T5"]);
    }

    #[tokio::test]
    async fn test_delete_leaf_keeps_parent() {
        let teams = directory();
        teams.delete_team(DeleteTeamVariables::new("T3")).await.unwrap();
        assert_eq!(ids(&teams), vec!["T1", "T2", "T4", "T5"]);
    }

    #[tokio::test]
    async fn test_unknown_team_is_an_api_error() {
        let teams = directory();
        let err = teams
            .delete_team(DeleteTeamVariables::new("nope"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DeleteTeamError::Api(ApiError {
                errors: vec![GraphQlError::new("team not found").at(&["deleteTeam"])],
            })
        );
        assert_eq!(teams.teams().len(), 5);
    }

    #[tokio::test]
    async fn test_readonly_team_is_refused() {
        let teams = directory();
        let err = teams
            .delete_team(DeleteTeamVariables::new("T5"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DeleteTeamError::Api(ApiError::single("cannot delete read-only team billing"))
        );
        assert_eq!(teams.teams().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let teams = directory().with_latency(Duration::from_millis(400));
        let start = tokio::time::Instant::now();
        teams.delete_team(DeleteTeamVariables::new("T4")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[test]
    fn test_busy_directory_is_a_local_failure() {
        let teams = directory();
        let _guard = teams.teams.borrow();
        let err = teams.remove_cascading("T4").unwrap_err();
        assert!(matches!(err, DeleteTeamError::Unexpected(_)));
    }

    #[test]
    fn test_clones_share_storage() {
        let teams = directory();
        let other = teams.clone();
        other.remove_cascading("T4").unwrap();
        assert_eq!(teams.teams().len(), 4);
    }
}
