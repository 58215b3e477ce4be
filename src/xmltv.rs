#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Programme {
    #[serde(default)]
    id: Option<serde_json::Value>,
    channel_name: String,
    channel_id: i64,
    start_time: String,
    end_time: String,
    #[serde(default)]
    programme_title: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    synopsis: Option<String>,
    #[serde(default)]
    genre_title: Option<String>,
    #[serde(default)]
    parent_genre_title: Option<String>,
    #[serde(default)]
    live: Option<bool>,
}

impl Programme {
    fn channel(&self) -> String {
        format!("{}.{}", self.channel_name.replace(' ', "."), self.channel_id)
    }
}

pub(crate) fn convert(guide: &serde_json::Value) -> crate::Result<String> {
    let entries = guide
        .get("channel-programme")
        .and_then(serde_json::Value::as_array)
        .ok_or(crate::Error::InvalidGuide)?;

    let programmes = entries
        .iter()
        .filter_map(|entry| match serde_json::from_value::<Programme>(entry.clone()) {
            Ok(programme) => Some(programme),
            Err(err) => {
                log::warn!("skipping malformed programme {:?}: {err}", entry.get("id"));
                None
            }
        })
        .collect::<Vec<_>>();

    let mut document = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<tv>\n");

    let mut seen = Vec::new();
    for programme in &programmes {
        let channel = programme.channel();
        if seen.contains(&channel) {
            continue;
        }

        write_channel(&mut document, &channel, &programme.channel_name);
        seen.push(channel);
    }

    for programme in &programmes {
        if let Err(err) = write_programme(&mut document, programme) {
            log::warn!("skipping programme {:?}: {err}", programme.id);
        }
    }

    document.push_str("</tv>\n");

    Ok(document)
}

fn write_channel(document: &mut String, channel: &str, name: &str) {
    document.push_str(&format!(
        "  <channel id=\"{}\">\n",
        quick_xml::escape::escape(channel)
    ));
    document.push_str(&format!(
        "    <display-name>{}</display-name>\n",
        quick_xml::escape::escape(name)
    ));
    document.push_str(&format!(
        "    <icon src=\"{}\"/>\n",
        quick_xml::escape::escape(crate::icons::lookup(name))
    ));
    document.push_str("  </channel>\n");
}

fn write_programme(document: &mut String, programme: &Programme) -> crate::Result {
    // parse both timestamps before emitting anything, a bad record must not
    // leave a half-written element behind
    let start = chrono::DateTime::parse_from_rfc3339(&programme.start_time)?;
    let stop = chrono::DateTime::parse_from_rfc3339(&programme.end_time)?;

    let mut title = Vec::new();
    if programme.live.unwrap_or(false) {
        title.push("LIVE:".to_string());
    }
    title.push(
        programme
            .programme_title
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
    );
    if let Some(sub_title) = &programme.title {
        if !sub_title.is_empty() {
            title.push(sub_title.clone());
        }
    }
    title.push(start.format("%Y").to_string());

    document.push_str(&format!(
        "  <programme start=\"{}\" stop=\"{}\" channel=\"{}\">\n",
        start.format("%Y%m%d%H%M%S %z"),
        stop.format("%Y%m%d%H%M%S %z"),
        quick_xml::escape::escape(&programme.channel())
    ));
    document.push_str(&format!(
        "    <title lang=\"en\">{}</title>\n",
        quick_xml::escape::escape(&title.join(" "))
    ));
    document.push_str(&format!(
        "    <desc lang=\"en\">{}</desc>\n",
        quick_xml::escape::escape(programme.synopsis.as_deref().unwrap_or_default())
    ));
    document.push_str(&format!("    <date>{}</date>\n", start.format("%Y")));
    document.push_str(&format!(
        "    <icon src=\"{}\"/>\n",
        quick_xml::escape::escape(crate::icons::lookup(&programme.channel_name))
    ));
    document.push_str(&format!(
        "    <category lang=\"en\">{}</category>\n",
        quick_xml::escape::escape(programme.genre_title.as_deref().unwrap_or_default())
    ));
    if let Some(parent) = &programme.parent_genre_title {
        if !parent.is_empty() {
            document.push_str(&format!(
                "    <category lang=\"en\">{}</category>\n",
                quick_xml::escape::escape(parent)
            ));
        }
    }
    document.push_str("  </programme>\n");

    Ok(())
}
