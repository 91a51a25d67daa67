//! Output Rendering
//!
//! Renders price breakdowns and catalogs as text or JSON.

use crate::domain::entities::Catalog;
use crate::domain::value_objects::{LineItem, PriceBreakdown};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Symbols used in text output
struct Icons {
    times: &'static str,
    rule: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            times: "×",
            rule: "─",
        }
    }

    fn ascii() -> Self {
        Self {
            times: "x",
            rule: "-",
        }
    }
}

const LABEL_WIDTH: usize = 33;

/// Trait for rendering pricing results
pub trait Renderer {
    fn render_breakdown(&self, breakdown: &PriceBreakdown) -> String;
    fn render_catalog(&self, catalog: &Catalog) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn format_line(&self, line: &LineItem) -> String {
        let icons = self.icons();
        let discount = if line.discount != 1.0 {
            format!(" ({}{:.2})", icons.times, line.discount)
        } else {
            String::new()
        };
        format!(
            "{:<12} {:>8.3} {} {:>7.2} = {:>9.2}{}",
            line.kind.name(),
            line.quantity,
            icons.times,
            line.unit_price,
            line.price,
            discount
        )
    }
}

fn summary_row(label: &str, value: &str) -> String {
    format!("{:<width$} {:>9}", label, value, width = LABEL_WIDTH)
}

impl Renderer for TextRenderer {
    fn render_breakdown(&self, breakdown: &PriceBreakdown) -> String {
        let icons = self.icons();
        let mut out = Vec::new();

        if breakdown.lines.is_empty() && breakdown.skipped.is_empty() {
            out.push("(cart is empty)".to_string());
        }
        for line in &breakdown.lines {
            out.push(self.format_line(line));
        }
        if !breakdown.skipped.is_empty() {
            let names: Vec<_> = breakdown.skipped.iter().map(|k| k.name()).collect();
            out.push(format!("Not in catalog: {}", names.join(", ")));
        }

        out.push(icons.rule.repeat(LABEL_WIDTH + 10));
        out.push(summary_row("Subtotal", &format!("{:.2}", breakdown.subtotal)));
        if breakdown.promotion_applied {
            out.push(summary_row("Promotion", &format!("-{:.2}", breakdown.deduction)));
        }
        out.push(summary_row("Total", &format!("{:.2}", breakdown.total)));

        out.join("\n")
    }

    fn render_catalog(&self, catalog: &Catalog) -> String {
        let icons = self.icons();
        catalog
            .iter()
            .map(|(kind, good)| {
                let discount = if good.discount() != 1.0 {
                    format!(" ({}{:.2})", icons.times, good.discount())
                } else {
                    String::new()
                };
                format!("{:<12} {:>8.2}{}", kind.name(), good.base_price(), discount)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// JSON renderer
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_breakdown(&self, breakdown: &PriceBreakdown) -> String {
        serde_json::to_string_pretty(breakdown).unwrap_or_default()
    }

    fn render_catalog(&self, catalog: &Catalog) -> String {
        let goods: Vec<_> = catalog
            .iter()
            .map(|(kind, good)| {
                serde_json::json!({
                    "kind": kind,
                    "base_price": good.base_price(),
                    "discount": good.discount(),
                })
            })
            .collect();
        serde_json::to_string_pretty(&goods).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Cart;
    use crate::domain::value_objects::GoodKind;

    fn ascii() -> TextRenderer {
        TextRenderer { unicode: false }
    }

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn text_renderer_default_has_unicode() {
        assert!(TextRenderer::default().unicode);
    }

    #[test]
    fn format_line_without_discount() {
        let line = LineItem {
            kind: GoodKind::Apple,
            quantity: 5.0,
            unit_price: 8.0,
            discount: 1.0,
            price: 40.0,
        };
        insta::assert_snapshot!(ascii().format_line(&line), @"apple           5.000 x    8.00 =     40.00");
    }

    #[test]
    fn format_line_with_discount() {
        let line = LineItem {
            kind: GoodKind::Strawberry,
            quantity: 3.0,
            unit_price: 13.0,
            discount: 0.8,
            price: 31.2,
        };
        insta::assert_snapshot!(ascii().format_line(&line), @"strawberry      3.000 x   13.00 =     31.20 (x0.80)");
    }

    #[test]
    fn breakdown_shows_promotion_row_only_when_applied() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new(&catalog);
        cart.add_item(GoodKind::Apple, 12.5).unwrap();

        let text = ascii().render_breakdown(&cart.breakdown());
        assert!(!text.contains("Promotion"));

        cart.set_promotion(true);
        let text = ascii().render_breakdown(&cart.breakdown());
        let last: Vec<_> = text.lines().rev().take(2).collect();
        assert_eq!(last[0], summary_row("Total", "90.00"));
        assert_eq!(last[1], summary_row("Promotion", "-10.00"));
    }

    #[test]
    fn breakdown_lists_skipped_kinds() {
        let mut catalog = Catalog::new();
        catalog.insert(GoodKind::Apple, 8.0).unwrap();
        let mut cart = Cart::new(&catalog);
        cart.add_item(GoodKind::Mango, 1.0).unwrap();

        let text = ascii().render_breakdown(&cart.breakdown());
        assert!(!text.contains("(cart is empty)"));
        assert!(text.contains("Not in catalog: mango"));
    }

    #[test]
    fn breakdown_marks_empty_cart() {
        let catalog = Catalog::standard();
        let cart = Cart::new(&catalog);

        let text = ascii().render_breakdown(&cart.breakdown());
        assert_eq!(text.lines().next(), Some("(cart is empty)"));
        assert!(!text.contains("Not in catalog"));
    }

    #[test]
    fn catalog_text_lists_goods_in_order() {
        let catalog = Catalog::standard();
        catalog.set_discount(GoodKind::Mango, 0.5);

        let text = ascii().render_catalog(&catalog);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("apple"));
        insta::assert_snapshot!(lines[2], @"mango           20.00 (x0.50)");
    }

    #[test]
    fn json_breakdown_is_parseable() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new(&catalog);
        cart.add_item(GoodKind::Mango, 2.0).unwrap();

        let json = JsonRenderer.render_breakdown(&cart.breakdown());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 40.0);
        assert_eq!(value["lines"][0]["kind"], "mango");
        assert_eq!(value["promotion_applied"], false);
    }

    #[test]
    fn create_renderer_returns_json_for_json_format() {
        let catalog = Catalog::standard();
        let renderer = create_renderer(OutputFormat::Json, true);
        assert!(renderer.render_catalog(&catalog).trim_start().starts_with('['));
    }
}
