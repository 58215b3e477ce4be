pub(crate) const DEFAULT_ICON: &str =
    "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Sports.png";

pub(crate) fn lookup(channel: &str) -> &'static str {
    match channel {
        "FOX Cricket" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Cricket.png",
        "FOX Footy" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Footy.png",
        "FOX League" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20League.png",
        "FOX Sports 503" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Sports%20503.png",
        "FOX Sports 505" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Sports%20505.png",
        "FOX Sports 506" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Sports%20506.png",
        "FOX Sports More" => "https://raw.githubusercontent.com/J-Lich/Uncle-Fox-EPG/main/icons/FOX%20Sports%20More.png",
        _ => DEFAULT_ICON,
    }
}
