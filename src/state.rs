use crate::team::Team;

#[derive(Clone, Debug)]
pub struct AppState {
    pub teams: Vec<Team>,
    pub pending_delete: Option<Team>,
    pub message: Option<Message>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            pending_delete: None,
            message: None,
        }
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn open_delete(&mut self, team: Team) {
        self.clear_message();
        self.pending_delete = Some(team);
    }

    pub fn close_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Replaces the team list after a deletion and reports what went away.
    ///
    /// Only closes the dialog if it still shows the deleted team.
    pub fn finish_delete(&mut self, deleted: &Team, teams: Vec<Team>) {
        let removed = self.teams.len().saturating_sub(teams.len());
        if self.pending_delete.as_ref().map(|t| &t.id) == Some(&deleted.id) {
            self.pending_delete = None;
        }
        let name = &deleted.name;
        self.teams = teams;

        let text = match removed {
            0 | 1 => format!("Deleted team {}", name),
            n => format!("Deleted team {} and {} child teams", name, n - 1),
        };
        self.set_message(Message::success(text));
    }
}
