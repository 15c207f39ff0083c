//! Built-in template catalog

use serde::Serialize;

use super::LayoutKind;

/// Colors the PDF renderer draws with
///
/// Values are CSS color or gradient strings and are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfStyle {
    pub background: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub text_color: &'static str,
    pub header_color: &'static str,
}

/// A named pairing of a layout with web and PDF styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Glyph shown in template pickers
    pub preview: &'static str,
    pub layout: LayoutKind,
    /// Class tokens for the web surface
    pub style: &'static str,
    pub pdf_style: PdfStyle,
}

static TEMPLATES: [Template; 10] = [
    Template {
        id: "title-slide",
        name: "Title Slide",
        description: "Large centered title with subtitle - perfect for opening slides",
        preview: "📋",
        layout: LayoutKind::TitleSlide,
        style: "bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-blue-900 dark:to-indigo-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #dbeafe 0%, #e0e7ff 100%)",
            primary_color: "#3b82f6",
            secondary_color: "#1e40af",
            accent_color: "#60a5fa",
            text_color: "#1f2937",
            header_color: "#1e3a8a",
        },
    },
    Template {
        id: "two-column",
        name: "Two Column",
        description: "Split layout with title and two equal columns for comparisons",
        preview: "📊",
        layout: LayoutKind::TwoColumn,
        style: "bg-gradient-to-br from-green-50 to-emerald-100 dark:from-green-900 dark:to-emerald-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #ecfdf5 0%, #d1fae5 100%)",
            primary_color: "#10b981",
            secondary_color: "#047857",
            accent_color: "#34d399",
            text_color: "#1f2937",
            header_color: "#064e3b",
        },
    },
    Template {
        id: "bullet-points",
        name: "Bullet Points",
        description: "Traditional bullet point layout with title and list items",
        preview: "📝",
        layout: LayoutKind::BulletPoints,
        style: "bg-gradient-to-br from-purple-50 to-violet-100 dark:from-purple-900 dark:to-violet-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #faf5ff 0%, #ede9fe 100%)",
            primary_color: "#8b5cf6",
            secondary_color: "#7c3aed",
            accent_color: "#a78bfa",
            text_color: "#374151",
            header_color: "#5b21b6",
        },
    },
    Template {
        id: "quote-slide",
        name: "Quote Slide",
        description: "Large quote with attribution - great for testimonials or key insights",
        preview: "💬",
        layout: LayoutKind::QuoteSlide,
        style: "bg-gradient-to-br from-orange-50 to-amber-100 dark:from-orange-900 dark:to-amber-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #fffbeb 0%, #fef3c7 100%)",
            primary_color: "#f59e0b",
            secondary_color: "#d97706",
            accent_color: "#fbbf24",
            text_color: "#1f2937",
            header_color: "#92400e",
        },
    },
    Template {
        id: "image-text",
        name: "Image & Text",
        description: "Side-by-side layout with space for image and descriptive text",
        preview: "🖼️",
        layout: LayoutKind::ImageText,
        style: "bg-gradient-to-br from-cyan-50 to-teal-100 dark:from-cyan-900 dark:to-teal-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #ecfeff 0%, #f0fdfa 100%)",
            primary_color: "#06b6d4",
            secondary_color: "#0891b2",
            accent_color: "#67e8f9",
            text_color: "#0f172a",
            header_color: "#164e63",
        },
    },
    Template {
        id: "big-number",
        name: "Big Number",
        description: "Highlight statistics or key metrics with large numbers",
        preview: "💯",
        layout: LayoutKind::BigNumber,
        style: "bg-gradient-to-br from-red-50 to-rose-100 dark:from-red-900 dark:to-rose-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #fef2f2 0%, #fce7e7 100%)",
            primary_color: "#ef4444",
            secondary_color: "#dc2626",
            accent_color: "#f87171",
            text_color: "#1f2937",
            header_color: "#991b1b",
        },
    },
    Template {
        id: "timeline",
        name: "Timeline",
        description: "Step-by-step process or chronological information",
        preview: "⏰",
        layout: LayoutKind::Timeline,
        style: "bg-gradient-to-br from-indigo-50 to-blue-100 dark:from-indigo-900 dark:to-blue-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #eef2ff 0%, #dbeafe 100%)",
            primary_color: "#6366f1",
            secondary_color: "#4f46e5",
            accent_color: "#818cf8",
            text_color: "#1e293b",
            header_color: "#312e81",
        },
    },
    Template {
        id: "comparison",
        name: "Comparison",
        description: "Before/After or This vs That layout with visual separation",
        preview: "⚖️",
        layout: LayoutKind::Comparison,
        style: "bg-gradient-to-br from-pink-50 to-fuchsia-100 dark:from-pink-900 dark:to-fuchsia-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #fdf2f8 0%, #fae8ff 100%)",
            primary_color: "#ec4899",
            secondary_color: "#db2777",
            accent_color: "#f472b6",
            text_color: "#374151",
            header_color: "#be185d",
        },
    },
    Template {
        id: "call-to-action",
        name: "Call to Action",
        description: "Centered message with prominent action button or next steps",
        preview: "🎯",
        layout: LayoutKind::CallToAction,
        style: "bg-gradient-to-br from-emerald-50 to-green-100 dark:from-emerald-900 dark:to-green-800",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #ecfdf5 0%, #dcfce7 100%)",
            primary_color: "#059669",
            secondary_color: "#047857",
            accent_color: "#10b981",
            text_color: "#1f2937",
            header_color: "#064e3b",
        },
    },
    Template {
        id: "minimal-text",
        name: "Minimal Text",
        description: "Clean, spacious layout focusing on key message with lots of whitespace",
        preview: "✨",
        layout: LayoutKind::MinimalText,
        style: "bg-gradient-to-br from-gray-50 to-slate-100 dark:from-gray-700 dark:to-slate-600",
        pdf_style: PdfStyle {
            background: "linear-gradient(135deg, #f9fafb 0%, #f1f5f9 100%)",
            primary_color: "#6b7280",
            secondary_color: "#374151",
            accent_color: "#9ca3af",
            text_color: "#111827",
            header_color: "#1f2937",
        },
    },
];

/// All built-in templates, in catalog order
pub fn list_templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a built-in template by id
pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// The template used when a caller has not chosen one
pub fn default_template() -> &'static Template {
    &TEMPLATES[0]
}

/// Decorative gradient token for a layout's swatch in a template picker
pub fn preview_style_token(layout: &LayoutKind) -> &'static str {
    match layout {
        LayoutKind::TitleSlide => {
            "bg-gradient-to-b from-transparent via-gray-300 dark:via-gray-500 to-transparent"
        }
        LayoutKind::TwoColumn => {
            "bg-gradient-to-r from-gray-300 dark:from-gray-500 via-transparent to-gray-300 dark:to-gray-500"
        }
        LayoutKind::BulletPoints => {
            "bg-gradient-to-b from-gray-300 dark:from-gray-500 via-transparent via-gray-300 dark:via-gray-500 to-transparent"
        }
        LayoutKind::QuoteSlide => "bg-radial-gradient from-gray-300 dark:from-gray-500 to-transparent",
        LayoutKind::BigNumber => {
            "bg-gradient-to-t from-transparent via-gray-300 dark:via-gray-500 to-transparent"
        }
        LayoutKind::Timeline => {
            "bg-gradient-to-r from-gray-300 dark:from-gray-500 via-transparent to-transparent"
        }
        LayoutKind::Comparison => {
            "bg-gradient-to-r from-red-200 dark:from-red-800 via-transparent to-green-200 dark:to-green-800"
        }
        LayoutKind::CallToAction => {
            "bg-gradient-to-br from-transparent via-gray-300 dark:via-gray-500 to-transparent"
        }
        LayoutKind::ImageText => "bg-gradient-to-r from-gray-300 dark:from-gray-500 to-transparent",
        LayoutKind::MinimalText => {
            "bg-gradient-to-b from-transparent via-gray-200 dark:via-gray-600 to-transparent"
        }
        LayoutKind::Unknown(_) => DEFAULT_PREVIEW_TOKEN,
    }
}

pub const DEFAULT_PREVIEW_TOKEN: &str = "bg-gray-300 dark:bg-gray-500";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_ten_unique_templates() {
        let templates = list_templates();
        assert_eq!(templates.len(), 10);
        let ids: HashSet<_> = templates.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let ids: Vec<_> = list_templates().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "title-slide",
                "two-column",
                "bullet-points",
                "quote-slide",
                "image-text",
                "big-number",
                "timeline",
                "comparison",
                "call-to-action",
                "minimal-text",
            ]
        );
    }

    #[test]
    fn test_every_template_uses_a_known_layout() {
        for template in list_templates() {
            assert!(template.layout.is_known(), "{}", template.id);
            assert_eq!(template.layout.as_str(), template.id);
        }
    }

    #[test]
    fn test_find_template() {
        let t = find_template("big-number").expect("big-number exists");
        assert_eq!(t.name, "Big Number");
        assert_eq!(t.pdf_style.primary_color, "#ef4444");
        assert!(find_template("nope").is_none());
    }

    #[test]
    fn test_preview_token_for_unknown_layout() {
        let token = preview_style_token(&LayoutKind::Unknown("spiral".into()));
        assert_eq!(token, DEFAULT_PREVIEW_TOKEN);
    }

    #[test]
    fn test_preview_tokens_differ_for_comparison() {
        assert!(preview_style_token(&LayoutKind::Comparison).contains("red-200"));
    }
}
