const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER: &str = "https://tvguide.foxsports.com.au/";

pub(crate) async fn fetch(
    client: &reqwest::Client,
    from: &str,
    to: &str,
    channel: u32,
) -> crate::Result<serde_json::Value> {
    let url = format!(
        "https://tvguide.foxsports.com.au/granite-api/programmes.json?from={from}&to={to}&channel={channel}&callback=handleTvGuide"
    );

    log::info!("fetching {url}");

    // the API rejects requests without browser-looking headers
    let body = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::REFERER, REFERER)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    unwrap_jsonp(&body)
}

fn unwrap_jsonp(body: &str) -> crate::Result<serde_json::Value> {
    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start <= end => Ok(serde_json::from_str(&body[start..=end])?),
        _ => Err(crate::Error::Jsonp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_jsonp() {
        let body = "handleTvGuide({\"channel-programme\": []});";
        let data = unwrap_jsonp(body).unwrap();

        assert!(data.get("channel-programme").is_some());
    }

    #[test]
    fn test_unwrap_jsonp_nested_braces() {
        let body = "handleTvGuide({\"channel-programme\": [{\"channelId\": 10}]})";
        let data = unwrap_jsonp(body).unwrap();

        assert_eq!(data["channel-programme"][0]["channelId"], 10);
    }

    #[test]
    fn test_unwrap_jsonp_without_object() {
        assert!(matches!(
            unwrap_jsonp("handleTvGuide(null)"),
            Err(crate::Error::Jsonp)
        ));
        assert!(matches!(unwrap_jsonp("} oops {"), Err(crate::Error::Jsonp)));
    }

    #[test]
    fn test_unwrap_jsonp_invalid_json() {
        assert!(matches!(
            unwrap_jsonp("handleTvGuide({\"channel-programme\": )}"),
            Err(crate::Error::Json(_))
        ));
    }
}
