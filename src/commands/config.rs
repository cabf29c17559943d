use crate::commands::resolve;
use crate::constants::{VIDEO_PARAMS, VIDEO_VALUES};
use crate::error::Result;
use crate::foscam::FoscamCam;
use crate::response::Reply;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use strum_macros::AsRefStr;

/// Video parameter names accepted by `camera_control.cgi`.
#[derive(Debug, Clone, Copy, AsRefStr)]
pub enum VideoParam {
    #[strum(serialize = "resolution")]
    Resolution,
    #[strum(serialize = "brightness")]
    Brightness,
    #[strum(serialize = "contrast")]
    Contrast,
    #[strum(serialize = "mode")]
    Mode,
    #[strum(serialize = "flipmirror")]
    FlipMirror,
}

/// Named value codes for the video parameters. Numeric levels (brightness,
/// contrast) are given as raw value strings instead.
#[derive(Debug, Clone, Copy, AsRefStr)]
pub enum VideoValue {
    #[strum(serialize = "240p")]
    Qvga,
    #[strum(serialize = "480p")]
    Vga,
    #[strum(serialize = "50hz")]
    Hz50,
    #[strum(serialize = "60hz")]
    Hz60,
    #[strum(serialize = "outdoor")]
    Outdoor,
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "flip")]
    Flip,
    #[strum(serialize = "mirror")]
    Mirror,
    #[strum(serialize = "flipmirror")]
    FlipMirror,
}

/// Clock settings for `set_datetime.cgi`. Only the fields that are set are
/// sent to the camera.
#[derive(Debug, Clone, Default)]
pub struct DateTimeSettings {
    /// Wall-clock time to set, sent as epoch seconds
    pub now: Option<DateTime<Local>>,
    /// Enable NTP synchronization
    pub ntp_enable: Option<bool>,
    /// NTP server hostname
    pub ntp_svr: Option<String>,
    /// Timezone offset in seconds
    pub tz: Option<i32>,
}

#[async_trait]
pub trait Config: Send + Sync {
    /// Set the camera alias shown in its web UI and overlays
    async fn set_alias(&self, alias: &str) -> Result<Reply>;

    /// Change date/time settings
    async fn set_datetime(&self, settings: &DateTimeSettings) -> Result<Reply>;

    /// Change a video setting by name or raw parameter/value code
    async fn set_video<P, V>(&self, param: P, value: V) -> Result<Reply>
    where
        P: AsRef<str> + Send,
        V: AsRef<str> + Send;

    /// Restore the camera configuration to factory defaults
    async fn restore_factory(&self) -> Result<Reply>;
}

#[async_trait]
impl Config for FoscamCam {
    async fn set_alias(&self, alias: &str) -> Result<Reply> {
        self.command("/set_alias.cgi", &[("alias", alias.to_string())])
            .await
    }

    async fn set_datetime(&self, settings: &DateTimeSettings) -> Result<Reply> {
        self.command("/set_datetime.cgi", &datetime_params(settings))
            .await
    }

    async fn set_video<P, V>(&self, param: P, value: V) -> Result<Reply>
    where
        P: AsRef<str> + Send,
        V: AsRef<str> + Send,
    {
        let param = resolve(&VIDEO_PARAMS, param.as_ref()).into_owned();
        let value = resolve(&VIDEO_VALUES, value.as_ref()).into_owned();
        self.command("/camera_control.cgi", &[("param", param), ("value", value)])
            .await
    }

    async fn restore_factory(&self) -> Result<Reply> {
        self.command("/restore_factory.cgi", &[]).await
    }
}

fn datetime_params(settings: &DateTimeSettings) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(now) = settings.now {
        params.push(("now", now.timestamp().to_string()));
    }
    if let Some(ntp_enable) = settings.ntp_enable {
        params.push(("ntp_enable", if ntp_enable { "1" } else { "0" }.to_string()));
    }
    if let Some(ntp_svr) = &settings.ntp_svr {
        params.push(("ntp_svr", ntp_svr.clone()));
    }
    if let Some(tz) = settings.tz {
        params.push(("tz", tz.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntp_flag_is_coerced_to_numeric() {
        let settings = DateTimeSettings {
            ntp_enable: Some(true),
            ntp_svr: Some("0.pool.ntp.org".to_string()),
            tz: Some(-3600),
            ..Default::default()
        };
        let params = datetime_params(&settings);
        assert_eq!(
            params,
            vec![
                ("ntp_enable", "1".to_string()),
                ("ntp_svr", "0.pool.ntp.org".to_string()),
                ("tz", "-3600".to_string()),
            ]
        );

        let disabled = DateTimeSettings {
            ntp_enable: Some(false),
            ..Default::default()
        };
        assert_eq!(datetime_params(&disabled), vec![("ntp_enable", "0".to_string())]);
    }

    #[test]
    fn unset_fields_are_not_sent() {
        assert!(datetime_params(&DateTimeSettings::default()).is_empty());
    }

    #[test]
    fn video_names_match_the_control_tables() {
        assert_eq!(VIDEO_PARAMS.get(VideoParam::Resolution.as_ref()).copied(), Some(0));
        assert_eq!(VIDEO_PARAMS.get(VideoParam::FlipMirror.as_ref()).copied(), Some(5));
        assert_eq!(VIDEO_VALUES.get(VideoValue::Vga.as_ref()).copied(), Some(32));
        assert_eq!(VIDEO_VALUES.get(VideoValue::FlipMirror.as_ref()).copied(), Some(3));
    }
}
