/// Renders the plain-text transcript of a closed ticket: every message body
/// in chronological order, each followed by a newline.
pub fn render<'a>(contents: impl IntoIterator<Item = &'a str>) -> String {
    let mut transcript = String::new();
    for body in contents {
        transcript.push_str(body);
        transcript.push('\n');
    }

    transcript
}

#[cfg(test)]
mod tests {
    use crate::tickets::transcript::render;

    #[test]
    fn test_render_joins_messages_with_trailing_newlines() {
        assert_eq!(render(["a", "b"]), "a\nb\n");
    }

    #[test]
    fn test_render_of_an_empty_history() {
        assert_eq!(render([]), "");
    }

    #[test]
    fn test_render_keeps_multiline_messages_intact() {
        assert_eq!(render(["first\nsecond", "third"]), "first\nsecond\nthird\n");
    }
}
