// src/templates/theme.rs

/// Style tokens for the page chrome. The stylesheet served at
/// /static/css/main.css is rendered from these, so presentation stays
/// configuration rather than markup.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub primary: String,
    pub primary_foreground: String,
    pub destructive: String,
    pub success: String,
    pub card_width: String,
    pub radius: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#f4f4f5".to_string(),
            surface: "#ffffff".to_string(),
            foreground: "#18181b".to_string(),
            muted: "#71717a".to_string(),
            primary: "#2563eb".to_string(),
            primary_foreground: "#ffffff".to_string(),
            destructive: "#dc2626".to_string(),
            success: "#16a34a".to_string(),
            card_width: "24rem".to_string(),
            radius: "0.5rem".to_string(),
        }
    }
}

impl Theme {
    pub fn with_primary(mut self, color: &str) -> Self {
        self.primary = color.to_string();
        self
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#":root {{
    --background: {};
    --surface: {};
    --foreground: {};
    --text-muted: {};
    --primary-color: {};
    --primary-foreground: {};
    --destructive: {};
    --success: {};
    --card-width: {};
    --radius: {};
}}

* {{
    box-sizing: border-box;
}}

body {{
    margin: 0;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--background);
    color: var(--foreground);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}}

.card {{
    display: flex;
    flex-direction: column;
    width: var(--card-width);
    padding: 1.5rem;
    background: var(--surface);
    border-radius: var(--radius);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
}}

.card h1 {{
    margin: 0 0 1.5rem 0;
    font-size: 1.875rem;
    text-align: left;
}}

.form-group {{
    margin-bottom: 1.5rem;
}}

.form-group label {{
    display: block;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
}}

.form-group input {{
    width: 100%;
    padding: 0.5rem 0.75rem;
    font-size: 1rem;
    color: var(--foreground);
    background: var(--surface);
    border: 1px solid var(--text-muted);
    border-radius: calc(var(--radius) / 2);
}}

.form-group input:focus {{
    outline: 2px solid var(--primary-color);
    outline-offset: 1px;
}}

.form-group input[disabled],
.form-group input[readonly] {{
    opacity: 0.6;
}}

.form-group input.input-error {{
    border-color: var(--destructive);
}}

.form-group input.input-error:focus {{
    outline-color: var(--destructive);
}}

.field-error {{
    margin: 0.5rem 0 0 0;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--destructive);
}}

.submit-error {{
    margin: 0 0 1.5rem 0;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--destructive);
}}

.success-message {{
    margin: 0 0 1.5rem 0;
    padding: 0.75rem 1rem;
    font-size: 0.875rem;
    border: 1px solid var(--success);
    border-radius: calc(var(--radius) / 2);
    color: var(--success);
}}

.btn {{
    padding: 0.625rem 1rem;
    font-size: 1rem;
    font-weight: 500;
    border: none;
    border-radius: calc(var(--radius) / 2);
    cursor: pointer;
}}

.btn-primary {{
    background: var(--primary-color);
    color: var(--primary-foreground);
}}

.btn-full {{
    width: 100%;
}}

.btn[disabled] {{
    opacity: 0.6;
    cursor: not-allowed;
}}

.auth-footer {{
    margin: 1.5rem 0 0 0;
    font-size: 0.875rem;
    text-align: center;
    color: var(--text-muted);
}}

.auth-footer a {{
    font-weight: 500;
    color: var(--primary-color);
    text-decoration: none;
}}

.auth-footer a:hover {{
    text-decoration: underline;
}}"#,
            self.background,
            self.surface,
            self.foreground,
            self.muted,
            self.primary,
            self.primary_foreground,
            self.destructive,
            self.success,
            self.card_width,
            self.radius,
        )
    }
}
