//! Card and grid fragments.

use shoe_catalog::card::{CardView, PriceLabel, TextLabel};
use shoe_catalog::variant::Badge;

use crate::escape::html_escape;

/// Render one card.
pub fn render_card_html(card: &CardView) -> String {
    let badge = card.badge.as_ref().map(render_badge).unwrap_or_default();
    let sale_price = card
        .sale_price
        .as_ref()
        .map(|label| render_price(label, "shoe-card__sale-price"))
        .unwrap_or_default();

    format!(
        r#"<a href="{href}" class="shoe-card-link">
    <article class="shoe-card shoe-card--{variant}" data-variant="{variant}">
        <div class="shoe-card__image" data-variant="{image_variant}">
            <img src="{src}" alt="{alt}">
            {badge}
        </div>
        <div class="spacer" style="height: {spacer}px"></div>
        <div class="shoe-card__row">
            {name}
            {price}
        </div>
        <div class="shoe-card__row">
            {colors}
            {sale_price}
        </div>
    </article>
</a>"#,
        href = html_escape(&card.href),
        variant = card.variant.as_str(),
        image_variant = card.image.variant.as_str(),
        src = html_escape(&card.image.src),
        alt = html_escape(&card.image.alt),
        badge = badge,
        spacer = card.spacer.size,
        name = render_text("h3", &card.name, "shoe-card__name"),
        price = render_price(&card.price, "shoe-card__price"),
        colors = render_text("p", &card.color_info, "shoe-card__colors"),
        sale_price = sale_price,
    )
}

/// Render a grid of cards.
pub fn render_card_grid(cards: &[CardView]) -> String {
    let cards_html: String = cards.iter().map(render_card_html).collect();

    format!(
        r#"<section class="shoe-grid" data-count="{}">
    {}
</section>"#,
        cards.len(),
        cards_html
    )
}

fn render_badge(badge: &Badge) -> String {
    format!(
        r#"<span class="shoe-card__badge" style="background-color: var(--color-{}); color: var(--color-{})">{}</span>"#,
        badge.background.as_str(),
        badge.foreground.as_str(),
        html_escape(badge.label)
    )
}

fn render_text(tag: &str, label: &TextLabel, class: &str) -> String {
    format!(
        r#"<{tag} class="{class}" style="font-weight: {weight}; color: var(--color-{color})">{text}</{tag}>"#,
        tag = tag,
        class = class,
        weight = label.weight.value(),
        color = label.color.as_str(),
        text = html_escape(&label.text),
    )
}

fn render_price(label: &PriceLabel, class: &str) -> String {
    let color = label
        .color
        .map(|c| format!("var(--color-{})", c.as_str()))
        .unwrap_or_else(|| "initial".to_string());
    let decoration = if label.struck_through {
        "line-through"
    } else {
        "none"
    };

    format!(
        r#"<span class="{}" style="font-weight: {}; color: {}; text-decoration: {}">{}</span>"#,
        class,
        label.weight.value(),
        color,
        decoration,
        html_escape(&label.text)
    )
}
