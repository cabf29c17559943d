use foscam_rs::{FoscamCam, Snapshot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <endpoint> <username> <password>", args[0]);
        return Ok(());
    }

    let cam = FoscamCam::new(&args[1]).with_credentials(&args[2], &args[3]);

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("snapshot_{}.jpg", timestamp);

    println!("Capturing image {}...", filename);
    let path = cam.snapshot_to_file(&filename).await?;

    let size = tokio::fs::metadata(&path).await?.len();
    println!("Saved {} ({} bytes)", path.display(), size);

    Ok(())
}
