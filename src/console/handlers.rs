//! Console command handlers
//!
//! Dispatches parsed commands to the session controller and turns the
//! outcome into text for the terminal.

use crate::console::{Command, CommandResult, CommandStatus};
use crate::dashboard::render_driver_details;
use crate::error::handlers::user_message;
use crate::error::{PortalError, ValidationError};
use crate::session::{DriverLoginForm, Screen, SessionController, SessionFailure};
use crate::validate;

pub const HELP_TEXT: &str = "\
Commands:
  LOGIN [civil-id] [REMEMBER|FORGET]  driver login (uses the remembered ID when omitted)
  ADMIN                               switch to admin login
  BACK                                return to driver login
  AUTH <username> <password>          admin login
  QUERY <civil-id>                    look up a driver (admin dashboard)
  LOGOUT                              leave the dashboard
  HELP                                show this text
  QUIT                                exit";

/// Dispatches a command to its handler.
pub async fn handle_command(
    controller: &SessionController,
    form: &mut DriverLoginForm,
    command: &Command,
) -> CommandResult {
    match command {
        Command::Login { civil_id, remember } => {
            handle_cmd_login(controller, form, civil_id.as_deref(), *remember).await
        }
        Command::Admin => to_result(controller.show_admin_login().await),
        Command::Back => to_result(controller.back_to_driver_login().await),
        Command::Auth { username, password } => {
            handle_cmd_auth(controller, username, password).await
        }
        Command::Query(civil_id) => handle_cmd_query(controller, civil_id).await,
        Command::Logout => to_result(controller.logout().await),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Quit,
            message: Some("Goodbye".into()),
        },
        Command::Unknown(raw) if raw.is_empty() => CommandResult::silent(),
        Command::Unknown(raw) => {
            CommandResult::failure(format!("Unknown command: {} (try HELP)", raw))
        }
    }
}

/// Handles LOGIN: typed values replace the form's, missing ones fall back to it.
///
/// The form is only touched on the driver login screen, and an incomplete
/// civil ID is refused here the way a disabled login button would be.
async fn handle_cmd_login(
    controller: &SessionController,
    form: &mut DriverLoginForm,
    civil_id: Option<&str>,
    remember: Option<bool>,
) -> CommandResult {
    let screen = controller.screen().await;
    if screen != Screen::DriverLogin {
        return CommandResult::failure(SessionFailure::WrongScreen(screen).message());
    }

    if let Some(input) = civil_id {
        form.civil_id = validate::normalize(input);
    }
    if let Some(remember) = remember {
        form.remember = remember;
    }

    if !form.can_submit() {
        let err = if form.civil_id.is_empty() {
            ValidationError::EmptyCivilId
        } else {
            ValidationError::IncompleteCivilId
        };
        return CommandResult::failure(user_message(&PortalError::from(err)));
    }

    match controller
        .submit_driver_login(&form.civil_id, form.remember)
        .await
    {
        Ok(_) => CommandResult::silent(),
        Err(e) => CommandResult::failure(e.message()),
    }
}

async fn handle_cmd_auth(
    controller: &SessionController,
    username: &str,
    password: &str,
) -> CommandResult {
    match controller.submit_admin_login(username, password).await {
        Ok(_) => CommandResult::silent(),
        Err(e) => CommandResult::failure(e.message()),
    }
}

async fn handle_cmd_query(controller: &SessionController, civil_id: &str) -> CommandResult {
    match controller.query_driver(civil_id).await {
        Ok(record) => CommandResult::success(render_driver_details(&record)),
        Err(e) => CommandResult::failure(e.query_message()),
    }
}

fn to_result(result: Result<(), SessionFailure>) -> CommandResult {
    match result {
        Ok(()) => CommandResult::silent(),
        Err(e) => CommandResult::failure(e.message()),
    }
}
