// Dashboard controller - one render cycle per page load
use crate::application::cards::{
    render_github, render_last_updated, render_qiita, render_year, render_zenn, show_error,
};
use crate::application::container::Container;
use crate::application::formatter::Formatter;
use crate::application::trends_source::TrendsSource;
use chrono::Utc;
use std::sync::Arc;

/// The page elements a render cycle writes into.
#[derive(Debug, Clone, Default)]
pub struct DashboardPage<C> {
    pub year: C,
    pub last_updated: C,
    pub zenn: C,
    pub qiita: C,
    pub github: C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed,
}

#[derive(Clone)]
pub struct DashboardController {
    source: Arc<dyn TrendsSource>,
    formatter: Formatter,
}

impl DashboardController {
    pub fn new(source: Arc<dyn TrendsSource>, formatter: Formatter) -> Self {
        Self { source, formatter }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Fetch the document and render every section, or put all three lists
    /// into the error state.
    pub async fn load<C: Container>(&self, page: &mut DashboardPage<C>) -> LoadOutcome {
        render_year(self.formatter.current_year(Utc::now()), &mut page.year);

        let document = match self.source.fetch_document().await {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load trend data");
                show_error(
                    [&mut page.zenn, &mut page.qiita, &mut page.github],
                    self.formatter.locale().load_failed(),
                );
                return LoadOutcome::Failed;
            }
        };

        render_last_updated(document.last_updated(), &self.formatter, &mut page.last_updated);
        render_zenn(document.zenn(), &self.formatter, &mut page.zenn);
        render_qiita(document.qiita(), &self.formatter, &mut page.qiita);
        render_github(document.github(), &self.formatter, &mut page.github);

        tracing::debug!(
            zenn = document.zenn().map_or(0, <[_]>::len),
            qiita = document.qiita().map_or(0, <[_]>::len),
            github = document.github().map_or(0, <[_]>::len),
            "Rendered trend dashboard"
        );

        LoadOutcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::trends_source::FetchError;
    use crate::domain::locale::Locale;
    use crate::domain::markup::Markup;
    use crate::domain::trends::DashboardDocument;
    use async_trait::async_trait;
    use chrono::FixedOffset;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    const ONE_PER_SOURCE: &str = r#"{
        "metadata": { "last_updated": "2024-05-01T03:04:00Z" },
        "trends": {
            "zenn": [{ "title": "Zenn記事", "url": "https://zenn.dev/z/articles/1", "author": "z", "date": "2024-05-01" }],
            "qiita": [{ "title": "Qiita記事", "url": "https://qiita.com/q/items/1", "author": "q", "likes": 10, "tags": ["Rust"] }],
            "github": [{ "name": "g/repo", "url": "https://github.com/g/repo", "description": "desc", "language": "Rust", "stars": 5 }]
        }
    }"#;

    /// Plays back queued responses, one per fetch.
    struct StubSource {
        responses: Mutex<Vec<Result<&'static str, StatusCode>>>,
    }

    impl StubSource {
        fn new(responses: Vec<Result<&'static str, StatusCode>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
            })
        }
    }

    #[async_trait]
    impl TrendsSource for StubSource {
        async fn fetch_document(&self) -> Result<DashboardDocument, FetchError> {
            let next = self.responses.lock().unwrap().remove(0);
            match next {
                Ok(body) => Ok(serde_json::from_str(body)?),
                Err(status) => Err(FetchError::Status(status)),
            }
        }
    }

    fn controller(source: Arc<StubSource>) -> DashboardController {
        let formatter = Formatter::new(Locale::Ja, FixedOffset::east_opt(9 * 3600).unwrap());
        DashboardController::new(source, formatter)
    }

    fn has_card(list: &[Markup]) -> bool {
        list.iter().any(|m| m.as_str().contains("class=\"trend-card\""))
    }

    fn assert_error_state(page: &DashboardPage<Vec<Markup>>) {
        let message = Locale::Ja.load_failed();
        for list in [&page.zenn, &page.qiita, &page.github] {
            assert_eq!(list.len(), 1);
            assert!(list[0].as_str().contains(message));
            assert!(!has_card(list));
        }
        assert_eq!(page.zenn, page.qiita);
        assert_eq!(page.qiita, page.github);
    }

    #[tokio::test]
    async fn test_renders_one_card_per_item() {
        let controller = controller(StubSource::new(vec![Ok(ONE_PER_SOURCE)]));
        let mut page = DashboardPage::<Vec<Markup>>::default();

        assert_eq!(controller.load(&mut page).await, LoadOutcome::Rendered);

        assert_eq!(page.zenn.len(), 1);
        assert!(page.zenn[0].as_str().contains("href=\"https://zenn.dev/z/articles/1\""));
        assert_eq!(page.qiita.len(), 1);
        assert!(page.qiita[0].as_str().contains("href=\"https://qiita.com/q/items/1\""));
        assert_eq!(page.github.len(), 1);
        assert!(page.github[0].as_str().contains("href=\"https://github.com/g/repo\""));

        let last_updated: Markup = page.last_updated.iter().cloned().collect();
        assert!(last_updated.as_str().contains("2024/05/01 12:04"));

        let year = Formatter::new(Locale::Ja, FixedOffset::east_opt(9 * 3600).unwrap())
            .current_year(Utc::now());
        assert_eq!(page.year, vec![Markup::text(&year.to_string())]);
    }

    #[tokio::test]
    async fn test_missing_sections_render_empty_states() {
        let controller = controller(StubSource::new(vec![Ok(r#"{"trends": {"qiita": []}}"#)]));
        let mut page = DashboardPage::<Vec<Markup>>::default();

        assert_eq!(controller.load(&mut page).await, LoadOutcome::Rendered);
        assert!(page.last_updated.is_empty());
        for list in [&page.zenn, &page.qiita, &page.github] {
            assert_eq!(list.len(), 1);
            assert!(list[0].as_str().contains(Locale::Ja.empty_state()));
        }
    }

    #[tokio::test]
    async fn test_server_error_shows_error_everywhere() {
        let controller = controller(StubSource::new(vec![Err(StatusCode::INTERNAL_SERVER_ERROR)]));
        let mut page = DashboardPage::<Vec<Markup>>::default();

        assert_eq!(controller.load(&mut page).await, LoadOutcome::Failed);
        assert_error_state(&page);
        assert!(page.last_updated.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_body_shows_error_everywhere() {
        let controller = controller(StubSource::new(vec![Ok("<html>not json</html>")]));
        let mut page = DashboardPage::<Vec<Markup>>::default();

        assert_eq!(controller.load(&mut page).await, LoadOutcome::Failed);
        assert_error_state(&page);
    }

    #[tokio::test]
    async fn test_reload_after_error_clears_error_state() {
        let controller = controller(StubSource::new(vec![
            Err(StatusCode::SERVICE_UNAVAILABLE),
            Ok(ONE_PER_SOURCE),
        ]));
        let mut page = DashboardPage::<Vec<Markup>>::default();

        assert_eq!(controller.load(&mut page).await, LoadOutcome::Failed);
        assert_error_state(&page);

        assert_eq!(controller.load(&mut page).await, LoadOutcome::Rendered);
        let message = Locale::Ja.load_failed();
        for list in [&page.zenn, &page.qiita, &page.github] {
            assert_eq!(list.len(), 1);
            assert!(has_card(list));
            assert!(!list[0].as_str().contains(message));
        }
    }
}
