pub mod commands;
pub mod constants;
pub mod error;
pub mod foscam;
pub mod response;

pub use commands::*;
pub use error::{FoscamError, Result};
pub use foscam::FoscamCam;
pub use response::{ParamMap, ParamValue, Reply, decode_status, parse_params};
