pub mod config;
pub mod ptz;
pub mod snapshot;
pub mod system;

pub use config::{Config, DateTimeSettings, VideoParam, VideoValue};
pub use ptz::{Ptz, PtzCommand};
pub use snapshot::Snapshot;
pub use system::System;

use std::borrow::Cow;

/// Translate a symbolic name through `table`, rendering the code as the
/// query-string value. Unknown input is passed through unchanged so raw
/// numeric codes the table does not name still reach the camera.
pub(crate) fn resolve<'a>(table: &phf::Map<&'static str, u8>, input: &'a str) -> Cow<'a, str> {
    match table.get(input) {
        Some(code) => Cow::Owned(code.to_string()),
        None => Cow::Borrowed(input),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::constants::{PTZ_COMMANDS, VIDEO_PARAMS, VIDEO_VALUES};

    #[test]
    fn known_names_translate_to_codes() {
        assert_eq!(resolve(&PTZ_COMMANDS, "up"), "0");
        assert_eq!(resolve(&PTZ_COMMANDS, "stop"), "1");
        assert_eq!(resolve(&PTZ_COMMANDS, "io output low"), "95");
        assert_eq!(resolve(&VIDEO_PARAMS, "brightness"), "1");
        assert_eq!(resolve(&VIDEO_PARAMS, "flipmirror"), "5");
        assert_eq!(resolve(&VIDEO_VALUES, "480p"), "32");
        assert_eq!(resolve(&VIDEO_VALUES, "50hz"), "0");
    }

    #[test]
    fn unknown_input_passes_through_unchanged() {
        assert_eq!(resolve(&PTZ_COMMANDS, "75"), "75");
        assert_eq!(resolve(&VIDEO_VALUES, "128"), "128");
        assert_eq!(resolve(&PTZ_COMMANDS, "warp drive"), "warp drive");
    }
}
