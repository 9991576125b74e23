/// Plain-text rendering of the control panel
use streamer_control::{Panel, StatusKind};

/// Render the panel the way the interactive prompt prints it
pub fn render(panel: &Panel) -> String {
    let mut out = String::from("Devices:\n");

    if panel.devices().is_empty() {
        out.push_str("    (none)\n");
    }
    for name in panel.devices() {
        let marker = if panel.selected_device() == Some(name.as_str()) {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("  {} {}\n", marker, name));
    }

    out.push_str(&format!("Volume: {}\n", panel.volume_label()));
    out.push_str(&format!(
        "Loop:   {}\n",
        if panel.looping() { "on" } else { "off" }
    ));

    let status = panel.status();
    match status.kind {
        StatusKind::Idle => out.push_str("Status: -\n"),
        StatusKind::Error => out.push_str(&format!("Status: error: {}\n", status.message)),
        StatusKind::Busy | StatusKind::Info => {
            out.push_str(&format!("Status: {}\n", status.message));
        }
    }

    out
}
