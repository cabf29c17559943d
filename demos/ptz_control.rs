use foscam_rs::{FoscamCam, Ptz, PtzCommand};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <endpoint> <username> <password>", args[0]);
        return Ok(());
    }

    let cam = FoscamCam::new(&args[1]).with_credentials(&args[2], &args[3]);

    println!("Performing PTZ operations...");

    println!("Panning left...");
    cam.ptz(PtzCommand::Left).await?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    cam.ptz(PtzCommand::StopLeft).await?;

    println!("Panning right...");
    cam.ptz(PtzCommand::Right).await?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    cam.ptz(PtzCommand::StopRight).await?;

    println!("Recentering...");
    cam.ptz(PtzCommand::Center).await?;
    tokio::time::sleep(Duration::from_secs(2)).await;

    println!("Storing current position as preset 1...");
    cam.store_preset(1).await?;

    println!("Running one horizontal patrol...");
    cam.ptz(PtzCommand::HorizontalPatrol).await?;
    tokio::time::sleep(Duration::from_secs(5)).await;
    cam.ptz(PtzCommand::StopHorizontalPatrol).await?;

    println!("Returning to preset 1...");
    cam.goto_preset(1).await?;

    println!("Done.");
    Ok(())
}
