pub const BULLET: &str = "• ";
pub const ATTRIBUTION: &str = "— Generated at headcanongenerator.world";

/// Plain-text block placed on the clipboard by the copy action.
pub fn format_clipboard_text<S: AsRef<str>>(character: &str, headcanons: &[S]) -> String {
    let lines = headcanons
        .iter()
        .map(|headcanon| format!("{BULLET}{}", headcanon.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Headcanons for {character}:\n\n{lines}\n\n{ATTRIBUTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_text_has_header_bullets_and_footer() {
        let text = format_clipboard_text("Zuko", &["Hates tea", "Loves tea"]);
        assert_eq!(
            text,
            "Headcanons for Zuko:\n\n• Hates tea\n• Loves tea\n\n— Generated at headcanongenerator.world"
        );
    }

    #[test]
    fn each_item_gets_its_own_bullet_line() {
        let items = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let text = format_clipboard_text("X", &items);
        assert!(text.starts_with("Headcanons for X:"));
        let bullets = text.lines().filter(|line| line.starts_with(BULLET)).count();
        assert_eq!(bullets, 3);
    }
}
