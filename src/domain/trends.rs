// Trend document domain model - the data file published for the dashboard
use serde::{Deserialize, Deserializer};

/// Sentinel the producer writes when GitHub reports no language.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardDocument {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub trends: Option<Trends>,
}

impl DashboardDocument {
    pub fn last_updated(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| non_empty(m.last_updated.as_deref()))
    }

    pub fn zenn(&self) -> Option<&[ZennItem]> {
        self.trends.as_ref().and_then(|t| t.zenn.as_deref())
    }

    pub fn qiita(&self) -> Option<&[QiitaItem]> {
        self.trends.as_ref().and_then(|t| t.qiita.as_deref())
    }

    pub fn github(&self) -> Option<&[GithubItem]> {
        self.trends.as_ref().and_then(|t| t.github.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trends {
    #[serde(default)]
    pub zenn: Option<Vec<ZennItem>>,
    #[serde(default)]
    pub qiita: Option<Vec<QiitaItem>>,
    #[serde(default)]
    pub github: Option<Vec<GithubItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZennItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl ZennItem {
    pub fn date(&self) -> Option<&str> {
        non_empty(self.date.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QiitaItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl QiitaItem {
    pub fn avatar_url(&self) -> Option<&str> {
        non_empty(self.avatar_url.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: i64,
}

impl GithubItem {
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Language, unless missing or the "Unknown" sentinel.
    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_deref()).filter(|lang| *lang != UNKNOWN_LANGUAGE)
    }
}

// The producer writes "" for fields it could not fetch
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
