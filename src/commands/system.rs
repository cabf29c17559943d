use crate::error::Result;
use crate::foscam::FoscamCam;
use crate::response::{decode_status, parse_params, ParamMap, Reply};
use async_trait::async_trait;

#[async_trait]
pub trait System: Send + Sync {
    /// Get device status, with alarm/DDNS/UPnP codes decoded to labels
    async fn status(&self) -> Result<ParamMap>;

    /// Get the video-related camera parameters
    async fn camera_params(&self) -> Result<ParamMap>;

    /// Get the full device parameter dump
    async fn device_params(&self) -> Result<ParamMap>;

    /// Reboot the camera
    async fn reboot(&self) -> Result<Reply>;
}

#[async_trait]
impl System for FoscamCam {
    async fn status(&self) -> Result<ParamMap> {
        let body = self.get_text("/get_status.cgi", &[]).await?;
        let mut params = parse_params(&body);
        decode_status(&mut params);
        Ok(params)
    }

    async fn camera_params(&self) -> Result<ParamMap> {
        let body = self.get_text("/get_camera_params.cgi", &[]).await?;
        Ok(parse_params(&body))
    }

    async fn device_params(&self) -> Result<ParamMap> {
        let body = self.get_text("/get_params.cgi", &[]).await?;
        Ok(parse_params(&body))
    }

    async fn reboot(&self) -> Result<Reply> {
        self.command("/reboot.cgi", &[]).await
    }
}
