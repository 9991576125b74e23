//! Interactive session and one-shot actions
//!
//! Both drive the same [`Controller`]; controller failures are already on
//! the panel's status line, so the interactive loop only logs them and
//! keeps reading.

use crate::command::{self, Command};
use crate::error::Result;
use crate::render::render;
use std::io::Write;
use streamer_client::PlaybackService;
use streamer_control::{Controller, PanelEvent};
use streamer_core::SliderLevel;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

const PROMPT: &str = "> ";

/// Run the prompt until `quit` or end of input
pub async fn run_interactive<S, R, W>(
    controller: &mut Controller<S>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: PlaybackService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Err(e) = controller.start().await {
        debug!(error = %e, "Initial refresh failed");
    }
    write!(out, "{}{}", render(controller.panel()), PROMPT)?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{}", command::HELP)?,
            Ok(Some(Command::Show)) => write!(out, "{}", render(controller.panel()))?,
            Ok(Some(Command::Event(event))) => {
                let redraw = event.touches_network() || matches!(event, PanelEvent::DeviceSelected(_));
                if let Err(e) = controller.handle(event).await {
                    debug!(error = %e, "Panel event failed");
                }
                if redraw {
                    write!(out, "{}", render(controller.panel()))?;
                } else {
                    writeln!(
                        out,
                        "Volume: {}  Loop: {}",
                        controller.panel().volume_label(),
                        if controller.panel().looping() { "on" } else { "off" }
                    )?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    info!("Session ended");
    Ok(())
}

/// One-shot `status`
pub async fn run_status<S: PlaybackService>(controller: &mut Controller<S>) -> Result<()> {
    controller.refresh_status().await?;
    Ok(())
}

/// One-shot `play`: refresh, pick the device, apply the controls, play
pub async fn run_play<S: PlaybackService>(
    controller: &mut Controller<S>,
    device: Option<&str>,
    volume: Option<u8>,
    looping: bool,
) -> Result<()> {
    prepare(controller, device).await?;
    if let Some(level) = volume {
        controller.move_slider(SliderLevel::new(level));
    }
    controller.set_loop(looping);
    controller.play().await?;
    Ok(())
}

/// One-shot `stop`
pub async fn run_stop<S: PlaybackService>(
    controller: &mut Controller<S>,
    device: Option<&str>,
) -> Result<()> {
    prepare(controller, device).await?;
    controller.stop().await?;
    Ok(())
}

/// One-shot `volume`: behaves like releasing the slider at `level`
///
/// Unlike the slider, an explicit command with no device to target is an
/// error rather than a local-only change.
pub async fn run_volume<S: PlaybackService>(
    controller: &mut Controller<S>,
    device: Option<&str>,
    level: u8,
) -> Result<()> {
    prepare(controller, device).await?;
    controller.require_selection()?;
    controller
        .handle(PanelEvent::VolumeRelease(SliderLevel::new(level)))
        .await?;
    Ok(())
}

async fn prepare<S: PlaybackService>(
    controller: &mut Controller<S>,
    device: Option<&str>,
) -> Result<()> {
    controller.refresh_status().await?;
    if let Some(name) = device {
        controller.select_device(name)?;
    }
    Ok(())
}
