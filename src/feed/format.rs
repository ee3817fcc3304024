// src/feed/format.rs
//! Body text preparation. HTML from the sources is turned into plain text
//! here, at ingestion, so nothing downstream ever interprets markup.
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Join content lines into an HTML fragment: every `.` ends a line pair and
/// blank lines start a new paragraph.
pub fn format_details(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.replace('.', ".<br/><br/>").replace("\n\n", "</p><p>"))
        .collect()
}

/// Render an HTML fragment as terminal text.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut ctx = TextContext::default();
    for child in fragment.root_element().children() {
        visit_node(child, &mut ctx);
    }
    ctx.finish()
}

/// Strip control characters other than newline and tab.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

fn visit_node(node: NodeRef<'_, Node>, ctx: &mut TextContext) {
    match node.value() {
        Node::Text(text) => ctx.append_text(text),
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                visit_element(element, ctx);
            }
        }
        _ => {
            for child in node.children() {
                visit_node(child, ctx);
            }
        }
    }
}

fn visit_element(element: ElementRef<'_>, ctx: &mut TextContext) {
    let tag = element.value().name().to_ascii_lowercase();
    match tag.as_str() {
        "br" => ctx.line_break(),
        "li" => {
            ctx.ensure_newline();
            ctx.append_text("• ");
            visit_children(element, ctx);
            ctx.ensure_newline();
        }
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote" => {
            ctx.ensure_blank_line();
            visit_children(element, ctx);
            ctx.ensure_blank_line();
        }
        "div" | "section" | "article" | "ul" | "ol" | "table" | "tr" | "header" | "footer" => {
            ctx.ensure_newline();
            visit_children(element, ctx);
            ctx.ensure_newline();
        }
        "script" | "style" | "noscript" | "iframe" | "template" | "object" | "embed" => {}
        _ => visit_children(element, ctx),
    }
}

fn visit_children(element: ElementRef<'_>, ctx: &mut TextContext) {
    for child in element.children() {
        visit_node(child, ctx);
    }
}

#[derive(Default)]
struct TextContext {
    out: String,
}

impl TextContext {
    fn append_text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                if !self.out.is_empty() && !self.out.ends_with(|last: char| last == ' ' || last == '\n') {
                    self.out.push(' ');
                }
            } else if !c.is_control() {
                self.out.push(c);
            }
        }
    }

    fn trim_trailing_spaces(&mut self) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
    }

    fn line_break(&mut self) {
        self.trim_trailing_spaces();
        self.out.push('\n');
    }

    fn ensure_newline(&mut self) {
        self.trim_trailing_spaces();
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn ensure_blank_line(&mut self) {
        self.ensure_newline();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        let mut text = String::with_capacity(self.out.len());
        let mut newlines = 0;
        for c in self.out.chars() {
            if c == '\n' {
                newlines += 1;
                if newlines > 2 {
                    continue;
                }
            } else {
                newlines = 0;
            }
            text.push(c);
        }
        text.trim().to_string()
    }
}
