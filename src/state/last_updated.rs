use crate::libs::api::{ ApiError, OverviewSource };
use crate::utils::time::{ self, TimeError };
use crate::{ always_eprint, debug_print };
use chrono::{ DateTime, Utc };
use std::error::Error;
use std::fmt;

/// Footer display state for one mount
#[derive(Debug, Clone, PartialEq)]
pub enum LastUpdated {
    Loading,
    /// Original timestamp string of the freshest repository, if any
    Resolved(Option<String>),
}

impl Default for LastUpdated {
    fn default() -> Self {
        LastUpdated::Loading
    }
}

/// What the footer shows next to the attribution once a timestamp is known
#[derive(Debug, Clone, PartialEq)]
pub struct LastUpdatedView {
    /// Untouched value from the API, used as the tooltip
    pub raw: String,
    /// Relative phrase such as "3 hours ago"
    pub phrase: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FooterError {
    Fetch(String),
    Parse(String),
    Format(TimeError),
}

impl fmt::Display for FooterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FooterError::Fetch(msg) => write!(f, "Failed to fetch last updated time: {}", msg),
            FooterError::Parse(msg) => write!(f, "Malformed repository overview: {}", msg),
            FooterError::Format(e) => write!(f, "Error formatting date: {}", e),
        }
    }
}

impl Error for FooterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FooterError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for FooterError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::NetworkError(msg) => FooterError::Fetch(msg),
            ApiError::ParseError(msg) => FooterError::Parse(msg),
        }
    }
}

impl From<TimeError> for FooterError {
    fn from(e: TimeError) -> Self {
        FooterError::Format(e)
    }
}

/// Fetch the overview and pick the freshest valid timestamp
pub async fn fetch_last_updated<S: OverviewSource>(source: &S) -> Result<Option<String>, FooterError> {
    let overview = source.repo_overview().await?;
    Ok(overview.last_updated())
}

/// Run the one-shot mount load. Errors are logged and collapse to `Resolved(None)`.
pub async fn load_last_updated<S: OverviewSource>(source: &S) -> LastUpdated {
    match fetch_last_updated(source).await {
        Ok(resolved) => {
            debug_print!("🕒 Last updated resolved to {:?}", resolved);
            LastUpdated::Resolved(resolved)
        }
        Err(e) => {
            always_eprint!("❌ {}", e);
            LastUpdated::Resolved(None)
        }
    }
}

impl LastUpdated {
    pub fn is_loading(&self) -> bool {
        matches!(self, LastUpdated::Loading)
    }

    fn try_view(&self, now: DateTime<Utc>) -> Result<Option<LastUpdatedView>, FooterError> {
        let raw = match self {
            LastUpdated::Resolved(Some(raw)) => raw,
            _ => {
                return Ok(None);
            }
        };

        let phrase = time::humanize(raw, now)?;
        Ok(Some(LastUpdatedView { raw: raw.clone(), phrase }))
    }

    /// The "Last Updated" segment, or `None` when nothing should be shown
    pub fn view(&self, now: DateTime<Utc>) -> Option<LastUpdatedView> {
        self.try_view(now).unwrap_or_else(|e| {
            always_eprint!("❌ {}", e);
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::overview::RepoOverview;
    use crate::utils::logger::recorder::LevelRecorder;
    use dioxus::logger::tracing::Level;
    use dioxus::logger::tracing::subscriber::{ set_default, with_default };
    use chrono::TimeZone;
    use std::cell::Cell;

    /// Canned overview source that counts how often it is asked
    struct StubSource {
        response: Result<&'static str, ApiError>,
        calls: Cell<u32>,
    }

    impl StubSource {
        fn payload(json: &'static str) -> Self {
            Self { response: Ok(json), calls: Cell::new(0) }
        }

        fn failing(error: ApiError) -> Self {
            Self { response: Err(error), calls: Cell::new(0) }
        }
    }

    impl OverviewSource for StubSource {
        async fn repo_overview(&self) -> Result<RepoOverview, ApiError> {
            self.calls.set(self.calls.get() + 1);
            let json = self.response.clone()?;
            serde_json::from_str(json).map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn themes_newer_than_plugins() {
        let source = StubSource::payload(
            r#"{"plugins":{"updated":"2024-01-01T00:00:00Z"},"themes":{"updated":"2024-06-01T00:00:00Z"}}"#
        );
        let state = load_last_updated(&source).await;
        assert_eq!(state, LastUpdated::Resolved(Some("2024-06-01T00:00:00Z".to_string())));
        assert_eq!(source.calls.get(), 1);

        let view = state.view(now()).expect("timestamp should be shown");
        assert_eq!(view.raw, "2024-06-01T00:00:00Z");
        assert_eq!(view.phrase, "3 hours ago");
    }

    #[tokio::test]
    async fn invalid_plugins_side_is_ignored() {
        let source = StubSource::payload(
            r#"{"plugins":{"updated":"not-a-date"},"themes":{"updated":"2024-06-01T00:00:00Z"}}"#
        );
        let state = load_last_updated(&source).await;
        let view = state.view(now()).expect("themes timestamp should be shown");
        assert_eq!(view.raw, "2024-06-01T00:00:00Z");
    }

    #[tokio::test]
    async fn empty_payload_shows_nothing() {
        let source = StubSource::payload("{}");
        let state = load_last_updated(&source).await;
        assert_eq!(state, LastUpdated::Resolved(None));
        assert_eq!(state.view(now()), None);
    }

    #[tokio::test]
    async fn network_failure_resolves_to_none() {
        let source = StubSource::failing(ApiError::NetworkError("connection refused".to_string()));
        let state = load_last_updated(&source).await;
        assert_eq!(state, LastUpdated::Resolved(None));
        assert!(!state.is_loading());
        assert_eq!(state.view(now()), None);
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn swallowed_fetch_error_is_logged_at_error_level() {
        let recorder = LevelRecorder::default();
        let _guard = set_default(recorder.clone());

        let source = StubSource::failing(ApiError::NetworkError("connection refused".to_string()));
        assert_eq!(load_last_updated(&source).await, LastUpdated::Resolved(None));
        assert!(recorder.levels().contains(&Level::ERROR));
    }

    #[test]
    fn swallowed_format_error_is_logged_at_error_level() {
        let recorder = LevelRecorder::default();
        let state = LastUpdated::Resolved(Some("yesterday-ish".to_string()));
        let view = with_default(recorder.clone(), || state.view(now()));
        assert_eq!(view, None);
        assert_eq!(recorder.levels(), vec![Level::ERROR]);
    }

    #[tokio::test]
    async fn malformed_payload_resolves_to_none() {
        let source = StubSource::payload(r#"{"plugins": ["#);
        assert_eq!(load_last_updated(&source).await, LastUpdated::Resolved(None));
    }

    #[tokio::test]
    async fn errors_keep_their_kind_before_collapsing() {
        let source = StubSource::failing(ApiError::NetworkError("HTTP 502 Bad Gateway".to_string()));
        assert_eq!(
            fetch_last_updated(&source).await,
            Err(FooterError::Fetch("HTTP 502 Bad Gateway".to_string()))
        );

        let source = StubSource::payload("[1, 2");
        assert!(matches!(fetch_last_updated(&source).await, Err(FooterError::Parse(_))));
    }

    #[test]
    fn loading_shows_nothing() {
        assert!(LastUpdated::default().is_loading());
        assert_eq!(LastUpdated::Loading.view(now()), None);
    }

    #[test]
    fn unformattable_value_degrades_to_nothing() {
        let state = LastUpdated::Resolved(Some("yesterday-ish".to_string()));
        assert_eq!(state.view(now()), None);
        assert!(matches!(state.try_view(now()), Err(FooterError::Format(_))));
    }
}
