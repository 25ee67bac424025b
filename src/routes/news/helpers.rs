pub fn notification_subject(market_place_name: &str) -> String {
    format!("{market_place_name} vous a envoyé une News !")
}

pub fn notification_content(title: &str, content: &str) -> String {
    format!("{title}\n\n\n{content}")
}
