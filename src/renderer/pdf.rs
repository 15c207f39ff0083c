//! PDF export surface
//!
//! Every layout renders to the same fixed-canvas box: header bar, slide
//! number, centered headline with an optional body, footer gradient bar.
//! Layout-specific structure (bullets, columns, steps, sides) is not drawn
//! here; only generic content contributes a body.

use crate::parser::SlideContent;
use crate::template::{PdfStyle, Template};

use super::config::PdfConfig;
use super::node::{el, Element, RenderNode};

/// Format a length in CSS pixels
pub(crate) fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Footer gradient running from the primary to the accent color
pub fn footer_gradient(style: &PdfStyle) -> String {
    format!(
        "linear-gradient(90deg, {} 0%, {} 100%)",
        style.primary_color, style.accent_color
    )
}

/// Render slide content for PDF export
pub fn render_pdf(
    content: &SlideContent,
    template: &Template,
    slide_number: usize,
    total_slides: usize,
    config: &PdfConfig,
) -> RenderNode {
    let style = &template.pdf_style;

    let header_bar = el("div")
        .style("position", "absolute")
        .style("top", "0")
        .style("left", "0")
        .style("right", "0")
        .style("height", px(config.header_bar_height))
        .style("background", style.primary_color);

    let slide_label = el("div")
        .style("position", "absolute")
        .style("top", px(config.slide_number_offset))
        .style("left", px(config.slide_number_offset))
        .style("font-size", px(config.slide_number_font_size))
        .style("color", style.primary_color)
        .style("font-weight", "bold")
        .text(format!("{}/{}", slide_number, total_slides));

    let body = content
        .generic_body()
        .filter(|b| !b.is_empty())
        .map(|b| {
            el("div")
                .style("font-size", px(config.body_font_size))
                .style("line-height", "1.6")
                .style("color", style.text_color)
                .style("white-space", "pre-wrap")
                .text(b)
        });

    let main: Element = el("div")
        .style("text-align", "center")
        .style("max-width", px(config.max_content_width))
        .child(
            el("h1")
                .style("font-size", px(config.title_font_size))
                .style("font-weight", "bold")
                .style("color", style.header_color)
                .style("margin-bottom", "30px")
                .style("line-height", "1.2")
                .text(content.headline()),
        )
        .child_opt(body);

    let footer_bar = el("div")
        .style("position", "absolute")
        .style("bottom", "0")
        .style("left", "0")
        .style("right", "0")
        .style("height", px(config.footer_bar_height))
        .style("background", footer_gradient(style));

    tracing::debug!(layout = %template.layout, slide_number, "rendered pdf slide");

    el("div")
        .style("width", px(config.width))
        .style("height", px(config.height))
        .style("background", style.background)
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("justify-content", "center")
        .style("align-items", "center")
        .style("padding", px(config.padding))
        .style("font-family", config.font_family.as_str())
        .style("position", "relative")
        .style("box-sizing", "border-box")
        .attr("data-layout", template.layout.as_str())
        .attr("data-slide", slide_number.to_string())
        .child(header_bar)
        .child(slide_label)
        .child(main)
        .child(footer_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse;
    use crate::template::{find_template, list_templates};

    fn render(raw: &str, template_id: &str) -> RenderNode {
        let template = find_template(template_id).unwrap();
        let content = parse(raw, &template.layout, 1);
        render_pdf(&content, template, 1, 3, &PdfConfig::default())
    }

    #[test]
    fn test_canvas_is_800_by_600() {
        let node = render("Hello", "title-slide");
        let root = node.as_element().unwrap();
        assert_eq!(root.style_value("width"), Some("800px"));
        assert_eq!(root.style_value("height"), Some("600px"));
        assert_eq!(
            root.style_value("background"),
            Some("linear-gradient(135deg, #dbeafe 0%, #e0e7ff 100%)")
        );
    }

    #[test]
    fn test_bars_use_template_colors() {
        let node = render("Hello", "big-number");
        let root = node.as_element().unwrap();
        let header = root.children[0].as_element().unwrap();
        let footer = root.children[3].as_element().unwrap();
        assert_eq!(header.style_value("height"), Some("8px"));
        assert_eq!(header.style_value("background"), Some("#ef4444"));
        assert_eq!(footer.style_value("height"), Some("4px"));
        assert_eq!(
            footer.style_value("background"),
            Some("linear-gradient(90deg, #ef4444 0%, #f87171 100%)")
        );
    }

    #[test]
    fn test_slide_label() {
        let node = render("Hello", "timeline");
        let root = node.as_element().unwrap();
        assert_eq!(root.children[1].text_content(), "1/3");
    }

    #[test]
    fn test_generic_body_is_rendered() {
        let node = render("Hello\nworld", "minimal-text");
        let h1 = node.find_by_tag("h1");
        assert_eq!(h1[0].style_value("color"), Some("#1f2937"));
        assert!(node.text_content().contains("world"));
    }

    #[test]
    fn test_structured_layouts_collapse_to_headline() {
        let node = render("Steps\none\ntwo", "bullet-points");
        let text = node.text_content();
        assert!(text.contains("Steps"));
        assert!(!text.contains("one"));
    }

    #[test]
    fn test_quote_headline_is_the_quote() {
        let node = render("Stay hungry\nSomeone", "quote-slide");
        assert_eq!(node.find_by_tag("h1")[0].text_content(), "Stay hungry");
    }

    #[test]
    fn test_every_template_has_same_structure() {
        for template in list_templates() {
            let content = parse("T\nbody", &template.layout, 1);
            let node = render_pdf(&content, template, 1, 1, &PdfConfig::default());
            assert_eq!(node.as_element().unwrap().children.len(), 4, "{}", template.id);
        }
    }

    #[test]
    fn test_custom_canvas() {
        let template = find_template("comparison").unwrap();
        let content = parse("T", &template.layout, 1);
        let config = PdfConfig::new().with_size(1080.0, 1350.0);
        let node = render_pdf(&content, template, 1, 1, &config);
        let root = node.as_element().unwrap();
        assert_eq!(root.style_value("width"), Some("1080px"));
        assert_eq!(root.style_value("height"), Some("1350px"));
    }
}
