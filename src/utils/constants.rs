/// Application constants used throughout the application
/// This file centralizes naming, branding and build metadata

/// The display name of the application
pub const APP_NAME: &str = "wpdir";

/// Window title for the desktop build
pub const APP_NAME_DISPLAY: &str = "WP Directory";

/// Version of the application (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit hash baked in by build.rs, if git was available
pub const APP_COMMIT: Option<&str> = option_env!("WPDIR_COMMIT");

/// Build timestamp baked in by build.rs
pub const APP_BUILD_DATE: Option<&str> = option_env!("WPDIR_BUILD_DATE");

/// API base compiled into the bundle, overridable at build time
pub const DEFAULT_API_URL: &str = match option_env!("WPDIR_API_URL") {
    Some(url) => url,
    None => "https://wpdirectory.net/api/v1",
};

/// Source repository linked from the footer
pub const REPO_URL: &str = "https://github.com/wpdirectory/wpdir";

pub const AUTHOR_NAME: &str = "Peter Booker";
pub const AUTHOR_URL: &str = "https://www.peterbooker.com";

pub const DREAMHOST_URL: &str = "https://www.dreamhost.com/";
pub const DREAMHOST_BADGE_URL: &str =
    "https://www.dreamhost.com/assets/images/logos/dreamhost-logo-light.svg";

/// Placeholder shown when a build value is missing
pub const UNKNOWN: &str = "unknown";
