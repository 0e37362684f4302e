use crate::utils::time::parse_instant;
use serde::{ Deserialize, Deserializer, Serialize };

/// Freshness summary for one repository (plugins or themes)
///
/// The backend sends more fields than this; only `updated` is read here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepoSummary {
    #[serde(default, deserialize_with = "string_or_none")]
    pub updated: Option<String>,
}

/// Payload of `GET /repos/overview`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepoOverview {
    #[serde(default)]
    pub plugins: Option<RepoSummary>,
    #[serde(default)]
    pub themes: Option<RepoSummary>,
}

impl RepoOverview {
    pub fn plugins_updated(&self) -> Option<&str> {
        self.plugins.as_ref().and_then(|summary| summary.updated.as_deref())
    }

    pub fn themes_updated(&self) -> Option<&str> {
        self.themes.as_ref().and_then(|summary| summary.updated.as_deref())
    }

    /// The most recent valid `updated` value across both repositories
    pub fn last_updated(&self) -> Option<String> {
        resolve_last_updated(self.plugins_updated(), self.themes_updated()).map(str::to_string)
    }
}

/// Pick the most recent of two optional timestamp strings.
///
/// A candidate only counts if it parses. When both parse, plugins wins only if
/// it is strictly later, so equal instants resolve to the themes value. The
/// original string is returned untouched.
pub fn resolve_last_updated<'a>(plugins: Option<&'a str>, themes: Option<&'a str>) -> Option<&'a str> {
    let plugins = plugins.and_then(|raw| parse_instant(raw).map(|at| (raw, at)));
    let themes = themes.and_then(|raw| parse_instant(raw).map(|at| (raw, at)));

    match (plugins, themes) {
        (Some((p, p_at)), Some((t, t_at))) => if p_at > t_at { Some(p) } else { Some(t) },
        (Some((p, _)), None) => Some(p),
        (None, Some((t, _))) => Some(t),
        (None, None) => None,
    }
}

// Non-string `updated` values are treated as missing rather than failing the whole payload
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de>
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
