use phf::phf_map;

pub const DEFAULT_ENDPOINT: &str = "http://192.168.1.239:81";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Decoder command codes understood by `decoder_control.cgi`.
pub static PTZ_COMMANDS: phf::Map<&'static str, u8> = phf_map! {
    "stop" => 1u8,
    "up" => 0u8,
    "stop up" => 1u8,
    "down" => 2u8,
    "stop down" => 3u8,
    "left" => 4u8,
    "stop left" => 5u8,
    "right" => 6u8,
    "stop right" => 7u8,
    "repeat horizontal patrol" => 20u8,
    "stop repeat horizontal patrol" => 21u8,
    "center" => 25u8,
    "vertical patrol" => 26u8,
    "stop vertical patrol" => 27u8,
    "horizontal patrol" => 28u8,
    "stop horizontal patrol" => 29u8,
    "left up" => 90u8,
    "right up" => 91u8,
    "left down" => 92u8,
    "right down" => 93u8,
    "io output high" => 94u8,
    "io output low" => 95u8,
};

// Decoder codes for "store position as preset N" and "move to preset N",
// indexed by preset id - 1. Public preset ids are 1-based.
pub const PRESET_SET: [u8; 16] = [
    30, 32, 34, 36, 38, 40, 42, 44, 46, 48, 50, 52, 54, 56, 58, 60,
];
pub const PRESET_GO: [u8; 16] = [
    31, 33, 35, 37, 39, 41, 43, 45, 47, 49, 51, 53, 55, 57, 59, 61,
];

/// Parameter ids understood by `camera_control.cgi`.
pub static VIDEO_PARAMS: phf::Map<&'static str, u8> = phf_map! {
    "resolution" => 0u8,
    "brightness" => 1u8,
    "contrast" => 2u8,
    "mode" => 3u8,
    "flipmirror" => 5u8,
};

/// Named value codes for `camera_control.cgi`. Raw numeric values
/// (e.g. brightness levels) are sent as-is.
pub static VIDEO_VALUES: phf::Map<&'static str, u8> = phf_map! {
    "240p" => 8u8,
    "480p" => 32u8,
    "50hz" => 0u8,
    "60hz" => 1u8,
    "outdoor" => 2u8,
    "default" => 0u8,
    "flip" => 1u8,
    "mirror" => 2u8,
    "flipmirror" => 3u8,
};

/// Labels for the `alarm_status` field of `get_status.cgi`, indexed by code.
pub const ALARM_STATES: [&str; 3] = ["No alarm", "Motion alarm", "Input alarm"];

/// Labels for the `ddns_status` field of `get_status.cgi`, indexed by code.
pub const DDNS_STATES: [&str; 22] = [
    "No action",
    "Connecting...",
    "Cannot connect to the server",
    "Dyndns succeed",
    "DynDns failed: Dyndns.org server error",
    "DynDns failed: Incorrect user or password",
    "DynDns failed: Need credited user",
    "DynDns failed: Illegal host format",
    "DynDns failed: Host does not exist",
    "DynDns failed: Host does not belong to you",
    "DynDns failed: Too many or too few hosts",
    "DynDns failed: Host is blocked for abusing",
    "DynDns failed: Bad Reply from Server",
    "DynDns failed: Bad Reply from Server",
    "Oray failed: Bad reply from server",
    "Oray failed: Incorrect user or password",
    "Oray failed: Incorrect hostname",
    "Oray succeed",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
];

/// Labels for the `upnp_status` field of `get_status.cgi`, indexed by code.
pub const UPNP_STATES: [&str; 6] = [
    "No action",
    "Succeed",
    "Device system error",
    "Errors in network communication",
    "Errors in chat with UPnP device",
    "Rejected by UPnP device, maybe port conflict",
];
