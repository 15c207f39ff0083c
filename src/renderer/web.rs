//! Web preview surface
//!
//! Produces class-token styled trees. The template's `style` tokens set the
//! slide background; everything else uses fixed utility classes per layout.

use crate::parser::SlideContent;
use crate::template::{LayoutKind, Template};

use super::node::{el, Element, RenderNode};

const BASE_CLASSES: &str = "rounded-xl p-8 min-h-[400px] relative overflow-hidden";
const CENTERED: &str = "flex flex-col justify-center items-center text-center";
const STACK: &str = "h-full flex flex-col";
const PANEL_TEXT: &str = "text-gray-700 dark:text-gray-300 leading-relaxed whitespace-pre-wrap";
const GLASS_PANEL: &str = "bg-white/20 dark:bg-black/20 rounded-lg backdrop-blur-sm";

/// Class token marking the slide-number indicator
pub const INDICATOR_CLASS: &str = "slide-indicator";

/// Render slide content for the web preview
///
/// Structured content (bullets, columns, ...) picks its own arrangement.
/// Generic content is arranged by the template's layout, and layouts the
/// renderer does not know get a centered title with an optional body.
pub fn render_web(
    content: &SlideContent,
    template: &Template,
    slide_number: usize,
    total_slides: usize,
) -> RenderNode {
    let indicator = slide_indicator(slide_number, total_slides);

    let slide = match content {
        SlideContent::Bullets { title, bullets } => bullet_points(template, indicator, title, bullets),
        SlideContent::Columns {
            title,
            left_column,
            right_column,
        } => two_column(template, indicator, title, left_column, right_column),
        SlideContent::BigNumber {
            title,
            number,
            description,
        } => big_number(template, indicator, title, number, description),
        SlideContent::Quote {
            quote,
            author,
            context,
        } => quote_slide(template, indicator, quote, author, context),
        SlideContent::Timeline { title, steps } => timeline(template, indicator, title, steps),
        SlideContent::Comparison {
            title,
            left_side,
            right_side,
        } => comparison(template, indicator, title, left_side, right_side),
        SlideContent::Generic { title, content } => match &template.layout {
            LayoutKind::TitleSlide => title_slide(template, indicator, title, content),
            LayoutKind::CallToAction => call_to_action(template, indicator, title, content),
            LayoutKind::ImageText => image_text(template, indicator, title, content),
            LayoutKind::MinimalText => minimal_text(template, indicator, title, content),
            _ => fallback(template, indicator, title, content),
        },
    };

    tracing::debug!(layout = %template.layout, slide_number, "rendered web slide");
    slide
        .attr("data-layout", template.layout.as_str())
        .attr("data-slide", slide_number.to_string())
        .into()
}

fn slide_indicator(slide_number: usize, total_slides: usize) -> Element {
    el("div")
        .class(INDICATOR_CLASS)
        .class("absolute top-4 left-4 text-sm font-bold opacity-70 z-10")
        .text(format!("{}/{}", slide_number, total_slides))
}

fn base(template: &Template) -> Element {
    el("div").class(template.style).class(BASE_CLASSES)
}

fn centered(template: &Template) -> Element {
    base(template).class(CENTERED)
}

/// A text element, or nothing when the text is empty
fn optional(tag: &str, classes: &str, text: &str) -> Option<Element> {
    (!text.is_empty()).then(|| el(tag).class(classes).text(text))
}

fn heading(classes: &str, title: &str) -> Element {
    el("h2").class(classes).text(title)
}

fn title_slide(template: &Template, indicator: Element, title: &str, content: &str) -> Element {
    centered(template)
        .child(indicator)
        .child(el("div").class(
            "absolute top-0 right-0 w-32 h-32 bg-white/10 rounded-full -translate-y-16 translate-x-16",
        ))
        .child(el("div").class(
            "absolute bottom-0 left-0 w-24 h-24 bg-white/10 rounded-full translate-y-12 -translate-x-12",
        ))
        .child(
            el("h1")
                .class("text-4xl md:text-5xl font-bold mb-6 text-gray-800 dark:text-gray-100 leading-tight")
                .text(title),
        )
        .child_opt(optional(
            "p",
            "text-xl text-gray-600 dark:text-gray-300 max-w-2xl leading-relaxed",
            content,
        ))
}

fn column_panel(accent: &str, text: &str) -> Element {
    el("div")
        .class(GLASS_PANEL)
        .class("p-6")
        .child(el("div").class("h-4 w-16 bg-gradient-to-r rounded mb-4").class(accent))
        .child(el("div").class(PANEL_TEXT).text(text))
}

fn two_column(
    template: &Template,
    indicator: Element,
    title: &str,
    left: &str,
    right: &str,
) -> Element {
    base(template).child(indicator).child(
        el("div")
            .class(STACK)
            .child(heading(
                "text-2xl font-bold mb-8 text-gray-800 dark:text-gray-100 text-center",
                title,
            ))
            .child(
                el("div")
                    .class("flex-1 grid md:grid-cols-2 gap-8")
                    .child(column_panel("from-blue-500 to-purple-500", left))
                    .child(column_panel("from-purple-500 to-pink-500", right)),
            ),
    )
}

fn bullet_points(template: &Template, indicator: Element, title: &str, bullets: &[String]) -> Element {
    let items = bullets.iter().map(|bullet| {
        el("div")
            .class("flex items-start space-x-4")
            .child(el("div").class(
                "w-3 h-3 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full mt-2 flex-shrink-0",
            ))
            .child(
                el("p")
                    .class("text-lg text-gray-700 dark:text-gray-300 leading-relaxed")
                    .text(bullet.as_str()),
            )
    });

    base(template).child(indicator).child(
        el("div")
            .class(STACK)
            .child(heading(
                "text-3xl font-bold mb-8 text-gray-800 dark:text-gray-100",
                title,
            ))
            .child(el("div").class("flex-1 space-y-4").children(items)),
    )
}

fn quote_slide(
    template: &Template,
    indicator: Element,
    quote: &str,
    author: &str,
    context: &str,
) -> Element {
    const GLYPH: &str = "text-6xl text-orange-300 dark:text-orange-600 opacity-50";

    let attribution = (!author.is_empty()).then(|| {
        el("div")
            .class("text-lg text-gray-600 dark:text-gray-400")
            .child(el("span").class("font-semibold").text(format!("\u{2014} {}", author)))
            .child_opt(optional("div", "text-sm mt-2", context))
    });

    centered(template)
        .child(indicator)
        .child(el("div").class("absolute top-8 left-8").class(GLYPH).text("\""))
        .child(
            el("div")
                .class("absolute bottom-8 right-8 rotate-180")
                .class(GLYPH)
                .text("\""),
        )
        .child(
            el("blockquote")
                .class("text-2xl md:text-3xl font-medium text-gray-800 dark:text-gray-100 mb-8 leading-relaxed max-w-3xl")
                .text(quote),
        )
        .child_opt(attribution)
}

fn big_number(
    template: &Template,
    indicator: Element,
    title: &str,
    number: &str,
    description: &str,
) -> Element {
    centered(template)
        .child(indicator)
        .child(
            el("div")
                .class("text-8xl md:text-9xl font-black text-red-500 dark:text-red-400 mb-4 leading-none")
                .text(number),
        )
        .child(heading(
            "text-2xl md:text-3xl font-bold mb-6 text-gray-800 dark:text-gray-100",
            title,
        ))
        .child_opt(optional(
            "p",
            "text-lg text-gray-600 dark:text-gray-300 max-w-2xl leading-relaxed",
            description,
        ))
}

fn timeline(template: &Template, indicator: Element, title: &str, steps: &[String]) -> Element {
    let items = steps.iter().enumerate().map(|(index, step)| {
        el("div")
            .class("relative")
            .child(
                el("div")
                    .class("absolute -left-20 w-8 h-8 bg-gradient-to-r from-indigo-500 to-blue-500 rounded-full flex items-center justify-center text-white font-bold text-sm")
                    .text((index + 1).to_string()),
            )
            .child(
                el("div").class(GLASS_PANEL).class("p-4").child(
                    el("p")
                        .class("text-gray-700 dark:text-gray-300 leading-relaxed")
                        .text(step.as_str()),
                ),
            )
    });

    base(template).child(indicator).child(
        el("div")
            .class(STACK)
            .child(heading(
                "text-3xl font-bold mb-8 text-gray-800 dark:text-gray-100 text-center",
                title,
            ))
            .child(
                el("div")
                    .class("flex-1 relative")
                    .child(el("div").class(
                        "absolute left-8 top-0 bottom-0 w-1 bg-gradient-to-b from-indigo-500 to-blue-500 rounded",
                    ))
                    .child(el("div").class("space-y-6 pl-16").children(items)),
            ),
    )
}

fn comparison_side(classes: &str, color: &str, label: &str, text: &str) -> Element {
    el("div")
        .class(classes)
        .child(
            el("div")
                .class("flex items-center mb-4")
                .child(el("div").class("w-4 h-4 rounded-full mr-3").class(&format!("bg-{}-500", color)))
                .child(
                    el("span")
                        .class("font-semibold")
                        .class(&format!("text-{}-700 dark:text-{}-300", color, color))
                        .text(label),
                ),
        )
        .child(el("div").class(PANEL_TEXT).text(text))
}

/// Inline chevron icon
fn chevron(classes: &str, path: &str) -> Element {
    el("svg")
        .class(classes)
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("viewBox", "0 0 24 24")
        .child(
            el("path")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", path),
        )
}

fn comparison(
    template: &Template,
    indicator: Element,
    title: &str,
    left: &str,
    right: &str,
) -> Element {
    base(template).child(indicator).child(
        el("div")
            .class(STACK)
            .child(heading(
                "text-2xl font-bold mb-8 text-gray-800 dark:text-gray-100 text-center",
                title,
            ))
            .child(
                el("div")
                    .class("flex-1 grid md:grid-cols-2 gap-1 relative")
                    .child(comparison_side(
                        "bg-red-50 dark:bg-red-900/20 rounded-l-lg p-6 border-r-2 border-gray-300 dark:border-gray-600",
                        "red",
                        "Before / Problem",
                        left,
                    ))
                    .child(comparison_side(
                        "bg-green-50 dark:bg-green-900/20 rounded-r-lg p-6",
                        "green",
                        "After / Solution",
                        right,
                    ))
                    .child(
                        el("div")
                            .class("absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 bg-white dark:bg-gray-800 rounded-full p-2 shadow-lg")
                            .child(chevron(
                                "w-6 h-6 text-gray-600 dark:text-gray-400",
                                "M9 5l7 7-7 7",
                            )),
                    ),
            ),
    )
}

fn call_to_action(template: &Template, indicator: Element, title: &str, content: &str) -> Element {
    centered(template)
        .child(indicator)
        .child(el("div").class(
            "absolute inset-0 bg-gradient-to-r from-emerald-400/20 to-green-400/20 rounded-xl",
        ))
        .child(
            el("div")
                .class("relative z-10")
                .child(heading(
                    "text-3xl md:text-4xl font-bold mb-6 text-gray-800 dark:text-gray-100",
                    title,
                ))
                .child_opt(optional(
                    "p",
                    "text-xl text-gray-600 dark:text-gray-300 mb-8 max-w-2xl leading-relaxed",
                    content,
                ))
                .child(
                    el("div")
                        .class("inline-flex items-center px-8 py-4 bg-gradient-to-r from-emerald-500 to-green-500 text-white font-semibold rounded-full shadow-lg transform hover:scale-105 transition-transform")
                        .child(el("span").text("Take Action Now"))
                        .child(chevron("ml-2 w-5 h-5", "M13 7l5 5m0 0l-5 5m5-5H6")),
                ),
        )
}

fn image_text(template: &Template, indicator: Element, title: &str, content: &str) -> Element {
    base(template).child(indicator).child(
        el("div")
            .class(STACK)
            .child(heading(
                "text-2xl font-bold mb-8 text-gray-800 dark:text-gray-100 text-center",
                title,
            ))
            .child(
                el("div")
                    .class("flex-1 grid md:grid-cols-2 gap-8 items-center")
                    .child(
                        el("div")
                            .class("bg-gradient-to-br from-cyan-100 to-teal-100 dark:from-cyan-800 dark:to-teal-800 rounded-lg p-8 flex items-center justify-center min-h-[200px]")
                            .child(
                                el("div")
                                    .class("text-center")
                                    .child(el("div").class("text-6xl mb-4").text("\u{1F5BC}\u{FE0F}"))
                                    .child(
                                        el("p")
                                            .class("text-sm text-gray-600 dark:text-gray-400")
                                            .text("Image Placeholder"),
                                    ),
                            ),
                    )
                    .child(
                        el("div")
                            .class("space-y-4")
                            .child(el("div").class(PANEL_TEXT).text(content)),
                    ),
            ),
    )
}

fn minimal_text(template: &Template, indicator: Element, title: &str, content: &str) -> Element {
    centered(template).child(indicator).child(
        el("div")
            .class("max-w-4xl")
            .child(heading(
                "text-3xl md:text-4xl font-light mb-12 text-gray-800 dark:text-gray-100 leading-relaxed",
                title,
            ))
            .child_opt(optional(
                "p",
                "text-lg text-gray-600 dark:text-gray-400 leading-loose font-light",
                content,
            )),
    )
}

fn fallback(template: &Template, indicator: Element, title: &str, content: &str) -> Element {
    centered(template)
        .child(indicator)
        .child(
            el("h1")
                .class("text-3xl font-bold mb-6 text-gray-800 dark:text-gray-200")
                .text(title),
        )
        .child_opt(optional(
            "div",
            "text-lg leading-relaxed text-gray-700 dark:text-gray-300 whitespace-pre-wrap",
            content,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::template::find_template;

    fn render(raw: &str, template_id: &str) -> RenderNode {
        let template = find_template(template_id).unwrap();
        let content = parse(raw, &template.layout, 2);
        render_web(&content, template, 2, 5)
    }

    #[test]
    fn test_indicator_on_every_layout() {
        for template in crate::template::list_templates() {
            let node = render("Title\nbody", template.id);
            let indicators = node.find_by_class(INDICATOR_CLASS);
            assert_eq!(indicators.len(), 1, "{}", template.id);
            assert_eq!(indicators[0].text_content(), "2/5");
        }
    }

    #[test]
    fn test_root_carries_template_style() {
        let node = render("Title", "timeline");
        let root = node.as_element().unwrap();
        assert!(root.has_class("from-indigo-50"));
        assert!(root.has_class("rounded-xl"));
    }

    #[test]
    fn test_title_slide_omits_empty_body() {
        let node = render("Only title", "title-slide");
        assert_eq!(node.find_by_tag("h1").len(), 1);
        assert!(node.find_by_tag("p").is_empty());
    }

    #[test]
    fn test_bullet_list_has_one_item_per_line() {
        let node = render("List\none\ntwo\nthree", "bullet-points");
        let items = node.find_by_tag("p");
        let texts: Vec<_> = items
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_timeline_markers_are_numbered() {
        let node = render("Plan\na\nb\nc\nd\ne", "timeline");
        let markers = node.find_by_class("-left-20");
        assert_eq!(markers.len(), 4);
        let last = markers[3].text_content();
        assert_eq!(last, "4");
    }

    #[test]
    fn test_quote_attribution_uses_em_dash() {
        let node = render("Be kind\nAda\nEngineer", "quote-slide");
        let text = node.text_content();
        assert!(text.contains("\u{2014} Ada"));
        assert!(text.contains("Engineer"));
        assert_eq!(node.find_by_tag("blockquote").len(), 1);
    }

    #[test]
    fn test_quote_without_author_has_no_attribution() {
        let node = render("Be kind", "quote-slide");
        assert!(node.find_by_tag("span").is_empty());
    }

    #[test]
    fn test_comparison_has_divider_glyph() {
        let node = render("Shift\nBefore vs After", "comparison");
        assert_eq!(node.find_by_tag("svg").len(), 1);
        let text = node.text_content();
        assert!(text.contains("Before / Problem"));
        assert!(text.contains("After / Solution"));
    }

    #[test]
    fn test_call_to_action_button() {
        let node = render("Join us\nSign up today", "call-to-action");
        assert!(node.text_content().contains("Take Action Now"));
    }

    #[test]
    fn test_image_text_placeholder() {
        let node = render("Product\nShiny", "image-text");
        assert!(node.text_content().contains("Image Placeholder"));
    }

    #[test]
    fn test_big_number_shows_number_first() {
        let node = render("Growth\nup 42% this year", "big-number");
        let root = node.as_element().unwrap();
        let numeral = root.children[1].text_content();
        assert_eq!(numeral, "42%");
    }

    #[test]
    fn test_unknown_layout_uses_fallback() {
        let mut template = find_template("title-slide").unwrap().clone();
        template.layout = LayoutKind::parse("hologram");
        let content = parse("Hello\nworld", &template.layout, 1);
        let node = render_web(&content, &template, 1, 1);
        let h1 = node.find_by_tag("h1");
        assert_eq!(h1.len(), 1);
        assert!(h1[0].has_class("text-3xl"));
        assert_eq!(node.find_by_class("whitespace-pre-wrap").len(), 1);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render("Same\ninput\nhere", "two-column");
        let b = render("Same\ninput\nhere", "two-column");
        assert_eq!(a, b);
    }
}
