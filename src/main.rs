mod errors;
mod guide;
mod icons;
mod xmltv;

use errors::*;

const CHANNELS: [u32; 7] = [10, 13, 3, 12, 14, 2, 11];
const OUTPUT_FILE: &str = "guide.xml";

#[tokio::main]
async fn main() -> Result {
    env_logger::init();

    let today = chrono::Local::now();
    let from = today.format("%Y-%m-%d").to_string();
    let to = (today + chrono::Duration::days(30)).format("%Y-%m-%d").to_string();

    log::info!("running EPG update for dates: {from} to {to}");

    let client = reqwest::Client::new();
    let mut programmes = Vec::new();

    for channel in CHANNELS {
        log::info!("fetching data for channel id: {channel}");

        match guide::fetch(&client, &from, &to, channel).await {
            Ok(data) => match data.get("channel-programme").and_then(serde_json::Value::as_array) {
                Some(list) if !list.is_empty() => programmes.extend(list.iter().cloned()),
                _ => log::warn!("no data for channel id: {channel}"),
            },
            Err(err) => log::error!("failed to fetch channel id {channel}: {err}"),
        }
    }

    if programmes.is_empty() {
        log::error!("no programme data was fetched");
        return Ok(());
    }

    let guide = serde_json::json!({ "channel-programme": programmes });

    match xmltv::convert(&guide) {
        Ok(document) => match save(&document) {
            Ok(()) => log::info!("XMLTV data saved to {OUTPUT_FILE}"),
            Err(err) => log::error!("failed to save {OUTPUT_FILE}: {err}"),
        },
        Err(err) => log::error!("failed to convert guide data: {err}"),
    }

    Ok(())
}

fn save(document: &str) -> Result {
    std::fs::write(OUTPUT_FILE, document)?;

    Ok(())
}
