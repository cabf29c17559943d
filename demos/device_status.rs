use foscam_rs::{FoscamCam, System};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <endpoint> <username> <password>", args[0]);
        return Ok(());
    }

    let cam = FoscamCam::new(&args[1]).with_credentials(&args[2], &args[3]);

    println!("Fetching device status...");
    let status = cam.status().await?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    println!("Fetching camera parameters...");
    let params = cam.camera_params().await?;
    println!("{}", serde_json::to_string_pretty(&params)?);

    Ok(())
}
