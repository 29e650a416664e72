// Markup domain model - escaped HTML fragments and a builder that only emits escaped text

use std::fmt;

/// Escape the five HTML-significant characters.
///
/// Absent or empty input yields an empty string. Each character is mapped
/// exactly once, so entities produced here are never escaped again.
pub fn escape(input: Option<&str>) -> String {
    let Some(text) = input else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A fragment of HTML that is safe to insert into a page.
///
/// There is no public constructor taking raw HTML: a `Markup` comes from
/// [`Markup::text`] or from building an [`Element`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn text(text: &str) -> Self {
        Self(escape(Some(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = String::new();
        for part in iter {
            out.push_str(&part.0);
        }
        Self(out)
    }
}

/// Element builder. Tag and attribute names are static; attribute values and
/// text children are escaped on insertion.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Markup>,
    void: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// Elements such as `img` that have no closing tag.
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, escape(Some(value))));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Markup::text(text));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn child_opt(self, child: Option<impl Into<Markup>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children<I, M>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Markup {
        let mut out = String::with_capacity(64);
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');

        if self.void {
            return Markup(out);
        }

        for child in &self.children {
            out.push_str(child.as_str());
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Markup(out)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        element.build()
    }
}

/// Icon-font glyph, e.g. `icon("fa-regular fa-user")`.
pub fn icon(classes: &str) -> Element {
    Element::new("i").class(classes)
}
