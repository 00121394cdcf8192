//! Minimal HTML writer for the preview markup.
//!
//! Text and attribute values are always escaped. Style values coming from
//! templates or user customizations are emitted as given, minus characters that
//! could break out of the `style` attribute; whether the browser accepts the
//! value is its own business.

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '"' | '<' | '>' | '\n' | '\r'))
        .collect()
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    match href.split_once(':') {
        Some((scheme, _)) => SAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)),
        None => false,
    }
}

/// Inline style declarations, built fluently.
#[derive(Debug, Default, Clone)]
pub struct Style(String);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, name: &str, value: &str) -> Self {
        let value = css_value(value);
        if !value.trim().is_empty() {
            self.0.push_str(name);
            self.0.push_str(": ");
            self.0.push_str(value.trim());
            self.0.push_str("; ");
        }
        self
    }

    pub fn px(self, name: &str, value: f32) -> Self {
        if value.is_finite() {
            self.prop(name, &format!("{}px", trim_float(value)))
        } else {
            self
        }
    }

    pub fn num(self, name: &str, value: f32) -> Self {
        if value.is_finite() {
            self.prop(name, &trim_float(value))
        } else {
            self
        }
    }

    /// Appends `other`'s declarations; later declarations win in CSS.
    pub fn merge(mut self, other: Style) -> Self {
        self.0.push_str(&other.0);
        self
    }

    pub fn as_str(&self) -> &str {
        self.0.trim_end()
    }
}

fn trim_float(v: f32) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Append-only markup buffer that tracks open elements.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
    open: Vec<&'static str>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &'static str, class: &str) -> &mut Self {
        self.open_styled(tag, class, &Style::new())
    }

    pub fn open_styled(&mut self, tag: &'static str, class: &str, style: &Style) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.attrs(class, style);
        self.buf.push('>');
        self.open.push(tag);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open.pop() {
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push('>');
        }
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_html(text));
        self
    }

    /// `<tag class style>text</tag>`
    pub fn element(
        &mut self,
        tag: &'static str,
        class: &str,
        style: &Style,
        text: &str,
    ) -> &mut Self {
        self.open_styled(tag, class, style).text(text).close()
    }

    /// `<a>` for http(s) and mailto targets. Any other scheme (`javascript:`,
    /// `data:`, ...) is written as a plain `<span>` so it cannot be followed.
    pub fn link(&mut self, href: &str, class: &str, style: &Style, text: &str) -> &mut Self {
        if !is_safe_href(href) {
            return self.element("span", class, style, text);
        }
        self.buf.push_str("<a href=\"");
        self.buf.push_str(&escape_html(href));
        self.buf.push('"');
        self.attrs(class, style);
        self.buf.push('>');
        self.open.push("a");
        self.text(text).close()
    }

    /// Closes anything still open and returns the markup.
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        self.buf
    }

    fn attrs(&mut self, class: &str, style: &Style) {
        if !class.is_empty() {
            self.buf.push_str(" class=\"");
            self.buf.push_str(&escape_html(class));
            self.buf.push('"');
        }
        if !style.as_str().is_empty() {
            self.buf.push_str(" style=\"");
            self.buf.push_str(&escape_html(style.as_str()));
            self.buf.push('"');
        }
    }
}
