//! UI controller
//!
//! Reflects backend state into the [`Panel`] and turns panel events into
//! backend requests. Requests are issued one at a time through `&mut self`;
//! nothing is retried, de-duplicated or rolled back, and every failure ends
//! up on the status line.

use crate::error::{ControlError, Result};
use crate::event::PanelEvent;
use crate::panel::Panel;
use crate::status::{self, StatusLine};
use streamer_client::PlaybackService;
use streamer_core::{PlaybackAction, SliderLevel, StatusSnapshot};
use tracing::{debug, error, info, warn};

/// Which read endpoint a refresh uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Devices,
    Status,
}

impl Source {
    fn busy(self) -> &'static str {
        match self {
            Self::Devices => status::SCANNING,
            Self::Status => status::FETCHING_STATUS,
        }
    }

    fn done(self) -> &'static str {
        match self {
            Self::Devices => status::SCAN_COMPLETE,
            Self::Status => status::STATUS_UPDATED,
        }
    }

    fn failed(self) -> &'static str {
        match self {
            Self::Devices => status::SCAN_FAILED,
            Self::Status => status::STATUS_FAILED,
        }
    }
}

/// Drives a [`Panel`] against a [`PlaybackService`]
pub struct Controller<S> {
    service: S,
    panel: Panel,
    default_device: Option<String>,
}

impl<S: PlaybackService> Controller<S> {
    pub fn new(service: S, panel: Panel) -> Self {
        Self {
            service,
            panel,
            default_device: None,
        }
    }

    /// Prefer `name` whenever a refresh lists it
    #[must_use]
    pub fn with_default_device(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.default_device = (!name.is_empty()).then_some(name);
        self
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn default_device(&self) -> Option<&str> {
        self.default_device.as_deref()
    }

    /// Initial load: show the slider label, then fetch the status
    pub async fn start(&mut self) -> Result<()> {
        self.update_volume_label();
        self.refresh_status().await
    }

    /// Dispatch a panel event to the operation wired to it
    pub async fn handle(&mut self, event: PanelEvent) -> Result<()> {
        debug!(?event, "Handling panel event");

        match event {
            PanelEvent::Refresh => self.refresh_status().await,
            PanelEvent::VolumeInput(level) => {
                self.move_slider(level);
                Ok(())
            }
            PanelEvent::VolumeRelease(level) => {
                self.move_slider(level);
                self.set_volume().await
            }
            PanelEvent::LoopToggled(looping) => {
                self.set_loop(looping);
                Ok(())
            }
            PanelEvent::DeviceSelected(name) => self.select_device(&name),
            PanelEvent::Play => self.play().await,
            PanelEvent::Stop => self.stop().await,
        }
    }

    /// `GET /devices`, then rebuild the device options
    pub async fn refresh_devices(&mut self) -> Result<()> {
        self.refresh(Source::Devices, true).await
    }

    /// `GET /status`, then rebuild the device options
    pub async fn refresh_status(&mut self) -> Result<()> {
        self.refresh(Source::Status, true).await
    }

    /// `POST /play` for the selected device, then resync with the backend
    pub async fn play(&mut self) -> Result<()> {
        self.control_playback(PlaybackAction::Play).await
    }

    /// `POST /stop` for the selected device, then resync with the backend
    pub async fn stop(&mut self) -> Result<()> {
        self.control_playback(PlaybackAction::Stop).await
    }

    /// `POST /volume` with the current slider position
    ///
    /// Meant for slider release. Does nothing without a selected device.
    pub async fn set_volume(&mut self) -> Result<()> {
        let Some(request) = self.panel.volume_request() else {
            debug!("No device selected, volume change stays local");
            return Ok(());
        };

        if let Err(e) = self.service.set_volume(&request).await {
            error!(
                error = %e,
                network = e.is_network(),
                device = %request.device_name,
                "Failed to update volume"
            );
            self.panel.set_status(StatusLine::error(status::VOLUME_FAILED));
            return Err(e.into());
        }

        Ok(())
    }

    /// Sync the percentage label with the slider; never touches the network
    pub fn update_volume_label(&mut self) {
        self.panel.refresh_volume_label();
    }

    /// Move the slider and update its label
    pub fn move_slider(&mut self, level: SliderLevel) {
        self.panel.set_level(level);
        self.update_volume_label();
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.panel.set_looping(looping);
    }

    /// Fail with a status-line notice unless a device is selected
    ///
    /// For explicit commands; a slider release skips the request instead.
    pub fn require_selection(&mut self) -> Result<()> {
        if self.panel.selected_device().is_some() {
            return Ok(());
        }

        warn!("No device selected");
        self.panel.set_status(StatusLine::error(status::SELECT_DEVICE));
        Err(ControlError::NoDeviceSelected)
    }

    /// Select one of the listed devices
    pub fn select_device(&mut self, name: &str) -> Result<()> {
        if !self.panel.has_device(name) {
            warn!(device = %name, "Selected device is not in the current listing");
            self.panel
                .set_status(StatusLine::error(status::unknown_device(name)));
            return Err(ControlError::UnknownDevice(name.to_string()));
        }

        self.panel.set_selected(name.to_string());
        Ok(())
    }

    async fn fetch(&self, source: Source) -> streamer_client::Result<StatusSnapshot> {
        match source {
            Source::Devices => self.service.devices().await.map(StatusSnapshot::from),
            Source::Status => self.service.status().await,
        }
    }

    /// Quiet refreshes keep the current status text unless they fail
    async fn refresh(&mut self, source: Source, announce: bool) -> Result<()> {
        if announce {
            self.panel.set_status(StatusLine::busy(source.busy()));
        }

        let snapshot = match self.fetch(source).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, network = e.is_network(), ?source, "Refresh failed");
                self.panel.set_status(StatusLine::error(source.failed()));
                return Err(e.into());
            }
        };

        let panel = std::mem::take(&mut self.panel);
        self.panel = panel.apply_snapshot(&snapshot, self.default_device.as_deref());

        info!(
            devices = self.panel.devices().len(),
            selected = ?self.panel.selected_device(),
            playing = ?snapshot.playing_device,
            "Panel refreshed"
        );

        if announce {
            self.panel.set_status(StatusLine::info(source.done()));
        }
        Ok(())
    }

    async fn control_playback(&mut self, action: PlaybackAction) -> Result<()> {
        self.require_selection()?;
        let Some(request) = self.panel.playback_request() else {
            return Err(ControlError::NoDeviceSelected);
        };

        self.panel.set_status(StatusLine::busy(status::action_busy(action)));

        if let Err(e) = self.service.playback(action, &request).await {
            error!(
                error = %e,
                network = e.is_network(),
                %action,
                device = %request.device_name,
                "Playback request failed"
            );
            self.panel
                .set_status(StatusLine::error(status::action_failed(action)));
            return Err(e.into());
        }

        self.panel.set_status(StatusLine::info(status::action_done(action)));
        self.refresh(Source::Status, false).await
    }
}
