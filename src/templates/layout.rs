// src/templates/layout.rs

/// Full-viewport shell that centers a fixed-width card and hosts whatever
/// content the caller rendered. Purely structural.
pub fn render_page(title: &str, content: &str, brand: &str) -> String {
    render_page_styled(title, content, brand, None)
}

/// Variant taking a style override for the card container.
pub fn render_page_styled(
    title: &str,
    content: &str,
    brand: &str,
    card_style: Option<&str>,
) -> String {
    let card_style_attr = match card_style {
        Some(style) => format!(r#" style="{}""#, style),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <main class="card"{}>
{}
    </main>
</body>
</html>"#,
        title, brand, card_style_attr, content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_wraps_content_in_card() {
        let page = render_page("Login", "<p>hello</p>", "Gatehouse");

        assert!(page.contains("<title>Login - Gatehouse</title>"));
        assert!(page.contains(r#"<main class="card">"#));
        assert!(page.contains("<p>hello</p>"));
        assert!(page.contains(r#"href="/static/css/main.css""#));
    }

    #[test]
    fn test_card_style_override() {
        let page = render_page_styled("Login", "", "Gatehouse", Some("width: 30rem"));
        assert!(page.contains(r#"<main class="card" style="width: 30rem">"#));
    }
}
