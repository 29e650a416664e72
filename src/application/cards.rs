// Card renderers - one builder per source, plus the empty, error and last-updated states
use crate::application::container::Container;
use crate::application::formatter::Formatter;
use crate::domain::locale::Locale;
use crate::domain::markup::{icon, Element, Markup};
use crate::domain::trends::{GithubItem, QiitaItem, ZennItem};

pub const CARD_CLASS: &str = "trend-card";
pub const STATE_CLASS: &str = "loading-state";
pub const ERROR_STATE_CLASS: &str = "loading-state error-state";

/// Render Zenn articles into `container`.
pub fn render_zenn<C: Container>(items: Option<&[ZennItem]>, formatter: &Formatter, container: &mut C) {
    commit(items, formatter.locale(), container, |item| zenn_card(item, formatter));
}

/// Render Qiita articles into `container`.
pub fn render_qiita<C: Container>(items: Option<&[QiitaItem]>, formatter: &Formatter, container: &mut C) {
    commit(items, formatter.locale(), container, |item| qiita_card(item, formatter));
}

/// Render GitHub repositories into `container`.
pub fn render_github<C: Container>(items: Option<&[GithubItem]>, formatter: &Formatter, container: &mut C) {
    commit(items, formatter.locale(), container, |item| github_card(item, formatter));
}

/// Replace each list with the same error element.
///
/// `message` is a fixed string owned by the caller and goes in as text.
pub fn show_error<C: Container>(lists: [&mut C; 3], message: &str) {
    for list in lists {
        list.replace_children([error_state(message)]);
    }
}

/// Leaves `container` untouched when there is no timestamp.
pub fn render_last_updated<C: Container>(iso: Option<&str>, formatter: &Formatter, container: &mut C) {
    let Some(formatted) = formatter.format_last_updated(iso) else {
        return;
    };
    let label = format!(" {}: {}", formatter.locale().last_updated_label(), formatted);
    container.replace_children([icon("fa-solid fa-clock-rotate-left").build(), Markup::text(&label)]);
}

pub fn render_year<C: Container>(year: i32, container: &mut C) {
    container.replace_children([Markup::text(&year.to_string())]);
}

fn commit<T, C, F>(items: Option<&[T]>, locale: Locale, container: &mut C, build: F)
where
    C: Container,
    F: Fn(&T) -> Markup,
{
    match items {
        Some(items) if !items.is_empty() => container.replace_children(items.iter().map(build)),
        _ => container.replace_children([empty_state(locale)]),
    }
}

fn empty_state(locale: Locale) -> Markup {
    Element::new("div").class(STATE_CLASS).text(locale.empty_state()).build()
}

fn error_state(message: &str) -> Markup {
    Element::new("div")
        .class(ERROR_STATE_CLASS)
        .child(icon("fa-solid fa-circle-exclamation"))
        .text(" ")
        .text(message)
        .build()
}

/// Link that opens in a new tab without handing over `window.opener`.
fn card(url: &str) -> Element {
    Element::new("a")
        .class(CARD_CLASS)
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

fn meta_item(class: &str, glyph: Markup, value: &str) -> Element {
    Element::new("span").class(class).child(glyph).text(" ").text(value)
}

fn zenn_card(item: &ZennItem, formatter: &Formatter) -> Markup {
    let date = formatter.format_date(item.date());
    let date_item = (!date.is_empty()).then(|| meta_item("meta-item", icon("fa-regular fa-calendar").build(), &date));

    card(&item.url)
        .child(Element::new("div").class("card-title").text(&item.title))
        .child(
            Element::new("div")
                .class("card-meta")
                .child(meta_item("meta-item meta-author", icon("fa-regular fa-user").build(), &item.author))
                .child_opt(date_item),
        )
        .build()
}

fn qiita_card(item: &QiitaItem, formatter: &Formatter) -> Markup {
    let author_glyph = match item.avatar_url() {
        Some(src) => Element::void("img")
            .class("avatar")
            .attr("src", src)
            .attr("alt", "")
            .attr("width", "16")
            .attr("height", "16")
            .build(),
        None => icon("fa-regular fa-user").build(),
    };

    let tags = (!item.tags.is_empty()).then(|| {
        Element::new("div")
            .class("card-tags")
            .children(item.tags.iter().map(|tag| Element::new("span").class("tag-chip").text(tag)))
    });

    card(&item.url)
        .child(Element::new("div").class("card-title").text(&item.title))
        .child(
            Element::new("div")
                .class("card-meta")
                .child(meta_item("meta-item meta-author", author_glyph, &item.author))
                .child(meta_item(
                    "meta-item meta-likes",
                    icon("fa-solid fa-thumbs-up").build(),
                    &formatter.format_count(item.likes),
                )),
        )
        .child_opt(tags)
        .build()
}

fn github_card(item: &GithubItem, formatter: &Formatter) -> Markup {
    let locale = formatter.locale();
    let description = item.description().unwrap_or(locale.no_description());
    let language = item
        .language()
        .map(|lang| meta_item("meta-item", Element::new("span").class("language-dot").build(), lang));

    card(&item.url)
        .child(
            Element::new("div")
                .class("card-title repo-name")
                .child(icon("fa-solid fa-book-bookmark"))
                .text(" ")
                .text(&item.name),
        )
        .child(Element::new("div").class("card-desc").text(description))
        .child(
            Element::new("div")
                .class("card-meta")
                .child_opt(language)
                .child(meta_item(
                    "meta-item",
                    icon("fa-regular fa-star").build(),
                    &formatter.format_count(item.stars),
                )),
        )
        .build()
}
