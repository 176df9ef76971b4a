//! Stylesheet for painted cards.

use shoe_catalog::theme::ColorToken;

const CARD_RULES: &str = r#"
.shoe-grid { display: flex; flex-wrap: wrap; gap: 32px; }
.shoe-card-link { text-decoration: none; color: inherit; flex: 1 1 275px; }
.shoe-card__image { position: relative; }
.shoe-card__image img { width: 100%; }
.shoe-card__badge {
    position: absolute;
    top: 15px;
    right: -5px;
    border-radius: 5px;
    padding: 0.5rem 1rem;
}
.shoe-card__row { display: flex; justify-content: space-between; font-size: 1rem; }
"#;

/// CSS custom properties for every palette token.
pub fn theme_variables() -> String {
    let vars: String = ColorToken::ALL
        .iter()
        .map(|token| format!("    --color-{}: {};\n", token.as_str(), token.css()))
        .collect();
    format!(":root {{\n{}}}\n", vars)
}

/// Complete stylesheet for card markup.
pub fn card_stylesheet() -> String {
    format!("{}{}", theme_variables(), CARD_RULES)
}
