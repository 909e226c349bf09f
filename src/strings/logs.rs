pub fn config_read_error(path: &str) -> String {
    format!("Failed to read {path}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";

pub const STARTING: &str = "Starting Construct menu bot...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn registry_ready(count: usize) -> String {
    format!("Command registry ready with {count} entries")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn meminfo_unavailable(err: &str) -> String {
    format!("Memory statistics unavailable: {err}")
}
