use crate::commands::resolve;
use crate::constants::{PRESET_GO, PRESET_SET, PTZ_COMMANDS};
use crate::error::{FoscamError, Result};
use crate::foscam::FoscamCam;
use crate::response::Reply;
use async_trait::async_trait;
use strum_macros::AsRefStr;

/// Named decoder commands accepted by `decoder_control.cgi`. The serialized
/// names are the symbolic command vocabulary, so a `PtzCommand` can be given
/// anywhere a command name string is accepted.
#[derive(Debug, Clone, Copy, AsRefStr)]
pub enum PtzCommand {
    #[strum(serialize = "up")]
    Up,
    #[strum(serialize = "stop")]
    Stop,
    #[strum(serialize = "stop up")]
    StopUp,
    #[strum(serialize = "down")]
    Down,
    #[strum(serialize = "stop down")]
    StopDown,
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "stop left")]
    StopLeft,
    #[strum(serialize = "right")]
    Right,
    #[strum(serialize = "stop right")]
    StopRight,
    #[strum(serialize = "repeat horizontal patrol")]
    RepeatHorizontalPatrol,
    #[strum(serialize = "stop repeat horizontal patrol")]
    StopRepeatHorizontalPatrol,
    #[strum(serialize = "center")]
    Center,
    #[strum(serialize = "vertical patrol")]
    VerticalPatrol,
    #[strum(serialize = "stop vertical patrol")]
    StopVerticalPatrol,
    #[strum(serialize = "horizontal patrol")]
    HorizontalPatrol,
    #[strum(serialize = "stop horizontal patrol")]
    StopHorizontalPatrol,
    #[strum(serialize = "left up")]
    LeftUp,
    #[strum(serialize = "right up")]
    RightUp,
    #[strum(serialize = "left down")]
    LeftDown,
    #[strum(serialize = "right down")]
    RightDown,
    #[strum(serialize = "io output high")]
    IoOutputHigh,
    #[strum(serialize = "io output low")]
    IoOutputLow,
}

#[async_trait]
pub trait Ptz: Send + Sync {
    /// Drive the PTZ motor with a named command or a raw decoder code
    async fn ptz<C>(&self, cmd: C) -> Result<Reply>
    where
        C: AsRef<str> + Send;

    /// Store the current position in preset slot `preset_id` (1-16)
    async fn store_preset(&self, preset_id: u8) -> Result<Reply>;

    /// Move to the position stored in preset slot `preset_id` (1-16)
    async fn goto_preset(&self, preset_id: u8) -> Result<Reply>;
}

#[async_trait]
impl Ptz for FoscamCam {
    async fn ptz<C>(&self, cmd: C) -> Result<Reply>
    where
        C: AsRef<str> + Send,
    {
        let command = resolve(&PTZ_COMMANDS, cmd.as_ref()).into_owned();
        self.command("/decoder_control.cgi", &[("command", command)])
            .await
    }

    async fn store_preset(&self, preset_id: u8) -> Result<Reply> {
        self.ptz(preset_set_cmd(preset_id)?.to_string()).await
    }

    async fn goto_preset(&self, preset_id: u8) -> Result<Reply> {
        self.ptz(preset_go_cmd(preset_id)?.to_string()).await
    }
}

pub(crate) fn preset_set_cmd(preset_id: u8) -> Result<u8> {
    preset_cmd(&PRESET_SET, preset_id)
}

pub(crate) fn preset_go_cmd(preset_id: u8) -> Result<u8> {
    preset_cmd(&PRESET_GO, preset_id)
}

fn preset_cmd(codes: &[u8; 16], preset_id: u8) -> Result<u8> {
    preset_id
        .checked_sub(1)
        .and_then(|index| codes.get(usize::from(index)))
        .copied()
        .ok_or(FoscamError::PresetOutOfRange(preset_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_slots_translate_to_decoder_codes() {
        assert_eq!(preset_set_cmd(1).unwrap(), 30);
        assert_eq!(preset_set_cmd(16).unwrap(), 60);
        assert_eq!(preset_go_cmd(1).unwrap(), 31);
        assert_eq!(preset_go_cmd(16).unwrap(), 61);
    }

    #[test]
    fn preset_slots_outside_range_are_rejected() {
        assert!(matches!(
            preset_set_cmd(0),
            Err(FoscamError::PresetOutOfRange(0))
        ));
        assert!(matches!(
            preset_go_cmd(17),
            Err(FoscamError::PresetOutOfRange(17))
        ));
    }

    #[test]
    fn command_names_match_the_decoder_table() {
        assert_eq!(PTZ_COMMANDS.get(PtzCommand::Up.as_ref()).copied(), Some(0));
        assert_eq!(PTZ_COMMANDS.get(PtzCommand::Center.as_ref()).copied(), Some(25));
        assert_eq!(
            PTZ_COMMANDS
                .get(PtzCommand::StopRepeatHorizontalPatrol.as_ref())
                .copied(),
            Some(21)
        );
        assert_eq!(
            PTZ_COMMANDS.get(PtzCommand::IoOutputLow.as_ref()).copied(),
            Some(95)
        );
    }
}
