/// Spreads generated text out for markdown renderers.
pub fn markdown_spacing(text: &str) -> String {
    text.replace("\n- ", "\n\n- ").replace('\n', "\n\n")
}
