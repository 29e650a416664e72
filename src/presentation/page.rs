// Served page - element handles and the HTML document around them
use crate::application::container::Container;
use crate::application::dashboard_controller::DashboardPage;
use crate::domain::locale::Locale;
use crate::domain::markup::{icon, Element, Markup};

pub const TITLE: &str = "Tech Trend Dashboard";
const ICON_FONT_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// An element with a stable id whose children a renderer replaces.
#[derive(Debug, Clone)]
pub struct PageElement {
    tag: &'static str,
    id: &'static str,
    class: &'static str,
    children: Vec<Markup>,
}

impl PageElement {
    pub fn new(tag: &'static str, id: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            id,
            class,
            children: Vec::new(),
        }
    }

    pub fn render(&self) -> Markup {
        Element::new(self.tag)
            .id(self.id)
            .class(self.class)
            .children(self.children.iter().cloned())
            .build()
    }
}

impl Container for PageElement {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, node: Markup) {
        self.children.push(node);
    }
}

/// Fresh, empty page for one load.
pub fn new_page() -> DashboardPage<PageElement> {
    DashboardPage {
        year: PageElement::new("span", "year", "year"),
        last_updated: PageElement::new("div", "last-updated", "last-updated"),
        zenn: PageElement::new("div", "zenn-list", "trend-list"),
        qiita: PageElement::new("div", "qiita-list", "trend-list"),
        github: PageElement::new("div", "github-list", "trend-list"),
    }
}

fn section(class: &str, glyph: &str, heading: &str, list: &PageElement) -> Element {
    Element::new("section")
        .class(class)
        .child(
            Element::new("h2")
                .class("section-title")
                .child(icon(glyph))
                .text(" ")
                .text(heading),
        )
        .child(list.render())
}

/// Serialize the page into a complete HTML document.
pub fn render_document(page: &DashboardPage<PageElement>, locale: Locale) -> String {
    let head = Element::new("head")
        .child(Element::void("meta").attr("charset", "utf-8"))
        .child(
            Element::void("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(TITLE))
        .child(
            Element::void("link")
                .attr("rel", "stylesheet")
                .attr("href", ICON_FONT_CSS),
        );

    let header = Element::new("header")
        .class("header")
        .child(
            Element::new("h1")
                .child(icon("fa-solid fa-arrow-trend-up"))
                .text(" ")
                .text(TITLE),
        )
        .child(page.last_updated.render());

    let main = Element::new("main")
        .class("dashboard-grid")
        .child(section("trend-section zenn", "fa-solid fa-book-open", "Zenn", &page.zenn))
        .child(section("trend-section qiita", "fa-solid fa-magnifying-glass", "Qiita", &page.qiita))
        .child(section("trend-section github", "fa-brands fa-github", "GitHub", &page.github));

    let footer = Element::new("footer")
        .class("footer")
        .child(
            Element::new("p")
                .text("© ")
                .child(page.year.render())
                .text(" ")
                .text(TITLE),
        );

    let html = Element::new("html")
        .attr("lang", locale.html_lang())
        .child(head)
        .child(Element::new("body").child(header).child(main).child(footer))
        .build();

    format!("<!DOCTYPE html>\n{}", html)
}
