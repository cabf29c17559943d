use foscam_rs::{Config, FoscamCam, System, VideoParam, VideoValue};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <endpoint> <username> <password>", args[0]);
        return Ok(());
    }

    let cam = FoscamCam::new(&args[1]).with_credentials(&args[2], &args[3]);

    println!("Switching to 640x480...");
    cam.set_video(VideoParam::Resolution, VideoValue::Vga).await?;

    println!("Setting brightness to 128...");
    cam.set_video(VideoParam::Brightness, "128").await?;

    println!("Setting 50 Hz anti-flicker mode...");
    cam.set_video(VideoParam::Mode, VideoValue::Hz50).await?;

    println!("Reading settings back...");
    let params = cam.camera_params().await?;
    println!("{}", serde_json::to_string_pretty(&params)?);

    Ok(())
}
