//! Translation of CSS backgrounds into SVG paint

/// A color stop of a linear gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: String,
    /// Offset in percent, 0 to 100
    pub offset: f64,
}

/// A paint an SVG shape can be filled with
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    Linear {
        /// CSS angle: 0 points up, 90 points right
        angle: f64,
        stops: Vec<GradientStop>,
    },
}

const FALLBACK_COLOR: &str = "#ffffff";

impl Paint {
    /// Interpret a CSS background value
    ///
    /// Understands plain colors and `linear-gradient(<angle>deg, <color> <pct>%, ...)`.
    /// Anything else becomes the first hex color it mentions, or white.
    pub fn from_css(value: &str) -> Self {
        let value = value.trim();
        if let Some(inner) = value
            .strip_prefix("linear-gradient(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            if let Some(paint) = parse_linear(inner) {
                return paint;
            }
            return Paint::Solid(first_hex_color(value).unwrap_or(FALLBACK_COLOR).to_string());
        }
        if value.is_empty() || (value.contains('(') && !value.starts_with("rgb")) {
            return Paint::Solid(first_hex_color(value).unwrap_or(FALLBACK_COLOR).to_string());
        }
        Paint::Solid(value.to_string())
    }

    /// Gradient vector in object bounding box units: `(x1, y1, x2, y2)`
    pub fn vector(angle: f64) -> (f64, f64, f64, f64) {
        let rad = angle.to_radians();
        let dx = rad.sin() / 2.0;
        let dy = -rad.cos() / 2.0;
        (
            round3(0.5 - dx),
            round3(0.5 - dy),
            round3(0.5 + dx),
            round3(0.5 + dy),
        )
    }
}

fn parse_linear(inner: &str) -> Option<Paint> {
    let mut parts = inner.split(',').map(str::trim).peekable();

    let angle = match parts.peek().copied() {
        Some(first) if first.ends_with("deg") => {
            let angle = first.trim_end_matches("deg").trim().parse::<f64>().ok()?;
            parts.next();
            angle
        }
        // CSS default direction is top to bottom
        _ => 180.0,
    };

    let raw: Vec<&str> = parts.collect();
    if raw.len() < 2 {
        return None;
    }

    let last = raw.len() - 1;
    let mut stops = Vec::with_capacity(raw.len());
    for (i, part) in raw.iter().enumerate() {
        let mut tokens = part.split_whitespace();
        let color = tokens.next()?;
        let offset = match tokens.next() {
            Some(pct) => pct.strip_suffix('%')?.parse::<f64>().ok()?,
            None => 100.0 * i as f64 / last as f64,
        };
        stops.push(GradientStop {
            color: color.to_string(),
            offset,
        });
    }

    Some(Paint::Linear { angle, stops })
}

fn first_hex_color(value: &str) -> Option<&str> {
    let start = value.find('#')?;
    let len = value[start + 1..]
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(value.len() - start - 1);
    (len == 3 || len == 6 || len == 8).then(|| &value[start..start + 1 + len])
}

/// Round to three decimals, never yielding negative zero
pub(crate) fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_template_background() {
        let paint = Paint::from_css("linear-gradient(135deg, #dbeafe 0%, #e0e7ff 100%)");
        assert_eq!(
            paint,
            Paint::Linear {
                angle: 135.0,
                stops: vec![
                    GradientStop {
                        color: "#dbeafe".into(),
                        offset: 0.0
                    },
                    GradientStop {
                        color: "#e0e7ff".into(),
                        offset: 100.0
                    },
                ],
            }
        );
    }

    #[test]
    fn test_stops_without_offsets_are_spread() {
        let paint = Paint::from_css("linear-gradient(90deg, red, green, blue)");
        match paint {
            Paint::Linear { angle, stops } => {
                assert_eq!(angle, 90.0);
                let offsets: Vec<_> = stops.iter().map(|s| s.offset).collect();
                assert_eq!(offsets, vec![0.0, 50.0, 100.0]);
            }
            other => panic!("expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_default_angle() {
        let paint = Paint::from_css("linear-gradient(#000 0%, #fff 100%)");
        assert!(matches!(paint, Paint::Linear { angle, .. } if angle == 180.0));
    }

    #[test]
    fn test_solid_color() {
        assert_eq!(Paint::from_css("#3b82f6"), Paint::Solid("#3b82f6".into()));
    }

    #[test]
    fn test_unparsable_gradient_falls_back_to_first_hex() {
        let paint = Paint::from_css("linear-gradient(to right, #123456 0%, #abcdef 100%)");
        assert_eq!(paint, Paint::Solid("#123456".into()));
    }

    #[test]
    fn test_unknown_function_without_hex_is_white() {
        assert_eq!(
            Paint::from_css("radial-gradient(circle, red, blue)"),
            Paint::Solid("#ffffff".into())
        );
    }

    #[test]
    fn test_gradient_vectors() {
        assert_eq!(Paint::vector(90.0), (0.0, 0.5, 1.0, 0.5));
        assert_eq!(Paint::vector(180.0), (0.5, 0.0, 0.5, 1.0));
        assert_eq!(Paint::vector(135.0), (0.146, 0.146, 0.854, 0.854));
    }
}
