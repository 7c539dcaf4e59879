use crate::team::types::{DeleteTeamError, DeleteTeamVariables};
use async_trait::async_trait;
use dioxus::prelude::*;
use std::fmt;
use std::rc::Rc;

pub type Result<T> = std::result::Result<T, DeleteTeamError>;

/// Remote team operations.
#[async_trait(?Send)]
pub trait TeamsApi {
    async fn delete_team(&self, variables: DeleteTeamVariables) -> Result<()>;
}

/// Context handle to the teams API, provided once at the app root.
#[derive(Clone)]
pub struct TeamsClient(Rc<dyn TeamsApi>);

impl TeamsClient {
    pub fn new(api: Rc<dyn TeamsApi>) -> Self {
        Self(api)
    }

    pub fn api(&self) -> &dyn TeamsApi {
        self.0.as_ref()
    }
}

impl fmt::Debug for TeamsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TeamsClient")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<DeleteTeamError>,
}

impl MutationState {
    pub fn pending() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    /// Moves to pending unless a request is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        *self = Self::pending();
        true
    }

    pub fn settled(result: &Result<()>) -> Self {
        Self {
            loading: false,
            error: result.as_ref().err().cloned(),
        }
    }
}

/// Runs one delete request, publishing the pending and settled states.
pub async fn execute_delete(
    api: &dyn TeamsApi,
    variables: DeleteTeamVariables,
    mut publish: impl FnMut(MutationState),
) -> Result<()> {
    tracing::debug!(team_id = %variables.id, "deleting team");
    publish(MutationState::pending());

    let result = api.delete_team(variables).await;

    publish(MutationState::settled(&result));
    result
}

/// Reactive wrapper around the delete mutation for a single component.
#[derive(Clone)]
pub struct DeleteTeamMutation {
    client: TeamsClient,
    state: Signal<MutationState>,
}

impl DeleteTeamMutation {
    pub fn state(&self) -> MutationState {
        self.state.read().clone()
    }

    /// Marks the request pending right away so a second click is ignored.
    pub fn try_begin(&self) -> bool {
        let mut state = self.state;
        state.write().try_begin()
    }

    /// The request may outlive the component; state updates after unmount are dropped.
    pub async fn mutate(&self, variables: DeleteTeamVariables) -> Result<()> {
        let mut state = self.state;
        execute_delete(self.client.api(), variables, move |next| {
            if let Ok(mut current) = state.try_write() {
                *current = next;
            }
        })
        .await
    }
}

pub fn use_delete_team() -> DeleteTeamMutation {
    let client = use_context::<TeamsClient>();
    let state = use_signal(MutationState::default);
    DeleteTeamMutation { client, state }
}
