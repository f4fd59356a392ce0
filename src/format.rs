use std::time::Duration;

/// Render a playback duration as a compact clock string.
///
/// Durations of an hour or more render as `H:MM:SS`, shorter ones as `M:SS`,
/// and durations under a minute as two-digit seconds (`45`, `09`). A zero
/// duration renders as `00`.
///
/// Minutes are deliberately unpadded below an hour (`5:09`, not `05:09`);
/// above an hour they are padded (`1:02:03`). Display-compatibility rule,
/// see DESIGN.md.
pub fn short_time(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{:02}", seconds)
    }
}
