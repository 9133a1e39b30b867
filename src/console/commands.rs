//! Console commands
//!
//! Defines the commands accepted by the terminal front-end and the result
//! of handling them.

/// A parsed console command
#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    /// `LOGIN [civil-id] [REMEMBER|FORGET]`
    Login {
        civil_id: Option<String>,
        remember: Option<bool>,
    },
    Admin,
    Back,
    Auth {
        username: String,
        password: String,
    },
    Query(String),
    Logout,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "LOGIN",
            Command::Admin => "ADMIN",
            Command::Back => "BACK",
            Command::Auth { .. } => "AUTH",
            Command::Query(_) => "QUERY",
            Command::Logout => "LOGOUT",
            Command::Help => "HELP",
            Command::Quit => "QUIT",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}

// Keeps passwords out of logs
impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Auth { username, .. } => write!(f, "AUTH {} ***", username),
            Command::Login { civil_id, remember } => {
                write!(f, "LOGIN {:?} remember={:?}", civil_id, remember)
            }
            Command::Query(id) => write!(f, "QUERY {}", id),
            Command::Unknown(raw) => write!(f, "UNKNOWN {}", raw),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Quit,
}

/// Outcome of one command: status plus the text to print
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn silent() -> Self {
        Self {
            status: CommandStatus::Success,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: CommandStatus::Failure(message.clone()),
            message: Some(message),
        }
    }
}
