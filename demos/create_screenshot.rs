//! Request a screenshot, wait for it to finish, and save the image.
//!
//! cargo run --example create_screenshot -- <api key> <url> [output.png]

use std::time::Duration;

use browshot::{BrowshotClient, ClientConfig, Params};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(key), Some(url)) = (args.next(), args.next()) else {
        eprintln!("usage: create_screenshot <api key> <url> [output.png]");
        std::process::exit(2);
    };
    let output = args.next().unwrap_or_else(|| "screenshot.png".to_string());

    let client = BrowshotClient::with_config(ClientConfig {
        api_key: key,
        ..Default::default()
    })?;

    let account = client.account_info(&Params::new())?;
    println!("Balance: {}", account["balance"]);

    let shot = client.screenshot_create(&url, &Params::new().with("size", "screen"))?;
    if let Some(err) = shot.get("error") {
        eprintln!("Screenshot request rejected: {}", err);
        return Ok(());
    }

    let id = shot["id"]
        .as_u64()
        .ok_or_else(|| anyhow::anyhow!("reply has no screenshot id: {}", shot))?;
    println!("Screenshot #{} queued", id);

    loop {
        let info = client.screenshot_info(id, &Params::new())?;
        match info["status"].as_str() {
            Some("finished") => break,
            Some("error") => {
                eprintln!("Screenshot failed: {}", info["error"]);
                return Ok(());
            }
            status => println!("  status: {}", status.unwrap_or("unknown")),
        }
        std::thread::sleep(Duration::from_secs(5));
    }

    let path = client.screenshot_thumbnail_file(id, &output, &Params::new().with("width", 640))?;
    println!("Saved {}", path.display());

    Ok(())
}
