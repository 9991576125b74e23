//! Interactive command parsing
//!
//! Each line typed at the prompt becomes a [`Command`]; most of them map
//! directly onto a [`PanelEvent`].

use crate::error::{RemoteError, Result};
use streamer_control::PanelEvent;
use streamer_core::SliderLevel;

pub const HELP: &str = "\
Commands:
  refresh          fetch devices and status
  select <name>    select a device
  drag <0-100>     move the volume slider
  volume <0-100>   move and release the volume slider
  loop on|off      toggle looping
  play             start playback on the selected device
  stop             stop playback on the selected device
  show             print the panel
  help             print this help
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(PanelEvent),
    Show,
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "refresh" | "r" => Command::Event(PanelEvent::Refresh),
        "select" | "s" => {
            if rest.is_empty() {
                return Err(RemoteError::Command("select needs a device name".into()));
            }
            Command::Event(PanelEvent::DeviceSelected(rest.to_string()))
        }
        "drag" => Command::Event(PanelEvent::VolumeInput(parse_level(rest)?)),
        "volume" | "vol" | "v" => Command::Event(PanelEvent::VolumeRelease(parse_level(rest)?)),
        "loop" => Command::Event(PanelEvent::LoopToggled(parse_switch(rest)?)),
        "play" | "p" => Command::Event(PanelEvent::Play),
        "stop" => Command::Event(PanelEvent::Stop),
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(RemoteError::Command(format!("unknown command '{}'", other))),
    };

    Ok(Some(command))
}

fn parse_level(arg: &str) -> Result<SliderLevel> {
    match arg.parse::<u8>() {
        Ok(level) if level <= SliderLevel::MAX => Ok(SliderLevel::new(level)),
        _ => Err(RemoteError::Command(format!(
            "volume must be a whole number from 0 to 100, got '{}'",
            arg
        ))),
    }
}

fn parse_switch(arg: &str) -> Result<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(RemoteError::Command(format!(
            "loop takes on or off, got '{}'",
            arg
        ))),
    }
}
