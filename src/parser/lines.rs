//! Line structure of a raw slide block

/// A raw slide block split into its title line and body
///
/// Lines are kept exactly as written (no per-line trimming); only blank lines
/// are dropped. Blank lines in the body still mark paragraph boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideText<'a> {
    title: Option<&'a str>,
    body_lines: Vec<&'a str>,
    paragraphs: Vec<Vec<&'a str>>,
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl<'a> SlideText<'a> {
    pub fn split(raw: &'a str) -> Self {
        let mut lines = raw.lines().skip_while(|l| is_blank(l));
        let title = lines.next();

        let mut body_lines = Vec::new();
        let mut paragraphs: Vec<Vec<&'a str>> = Vec::new();
        let mut current: Vec<&'a str> = Vec::new();
        for line in lines {
            if is_blank(line) {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else {
                body_lines.push(line);
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        Self {
            title,
            body_lines,
            paragraphs,
        }
    }

    /// First non-blank line, if any
    pub fn title(&self) -> Option<&'a str> {
        self.title
    }

    /// Title, or `Slide <n>` when the block has no non-blank line
    pub fn title_or_placeholder(&self, slide_number: usize) -> String {
        match self.title {
            Some(t) => t.to_string(),
            None => format!("Slide {}", slide_number),
        }
    }

    /// Non-blank lines after the title, in order
    pub fn body_lines(&self) -> &[&'a str] {
        &self.body_lines
    }

    /// Body lines joined with `\n`
    pub fn body(&self) -> String {
        self.body_lines.join("\n")
    }

    /// Number of blank-line separated paragraphs in the body
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Text of the paragraph at `index`, lines joined with `\n`
    pub fn paragraph(&self, index: usize) -> Option<String> {
        self.paragraphs.get(index).map(|p| p.join("\n"))
    }

    /// Paragraphs from `start` onwards, separated by a blank line
    pub fn paragraphs_from(&self, start: usize) -> String {
        self.paragraphs
            .iter()
            .skip(start)
            .map(|p| p.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
