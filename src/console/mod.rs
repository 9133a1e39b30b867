//! Terminal front-end
//!
//! Reads commands line by line, dispatches them to the session controller
//! and prints the active screen after every transition.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod screens;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::handle_command;
pub use parser::parse_command;

use crate::session::{DriverLoginForm, Screen, SessionController};
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const MAX_LINE_LENGTH: usize = 512;

/// One interactive session over a reader/writer pair
#[derive(Debug)]
pub struct Console {
    controller: SessionController,
    form: DriverLoginForm,
}

impl Console {
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            form: DriverLoginForm::default(),
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Runs until QUIT or end of input.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.form = self.controller.mount_driver_login().await;
        self.write_screen(writer).await?;

        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                info!("Input closed");
                break;
            }

            if line.len() > MAX_LINE_LENGTH {
                write_line(writer, "Input too long").await?;
                continue;
            }

            let command = parse_command(&line);
            debug!("Received {:?}", command);

            let before = self.controller.screen().await;
            let result = handle_command(&self.controller, &mut self.form, &command).await;

            if let Some(message) = &result.message {
                write_line(writer, message).await?;
            }
            if result.status == CommandStatus::Quit {
                break;
            }

            let after = self.controller.screen().await;
            if after != before {
                if after == Screen::DriverLogin {
                    self.form = self.controller.mount_driver_login().await;
                }
                self.write_screen(writer).await?;
            }
        }

        writer.flush().await
    }

    async fn write_screen<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> std::io::Result<()> {
        let snapshot = self.controller.snapshot().await;
        write_line(writer, &screens::render_screen(&snapshot, &self.form)).await
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
