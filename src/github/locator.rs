//! Identity wrappers for the user repository listing endpoint.

use url::Url;

use super::error::GitHubError;

/// Default public GitHub REST API base.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Characters that would change the request path if they appeared in a login.
const FORBIDDEN_LOGIN_CHARACTERS: [char; 5] = ['/', '?', '#', '%', '\\'];

/// Validated GitHub login.
///
/// Surrounding whitespace is trimmed. Anything that could escape the
/// `/users/{login}/repos` path segment is rejected before a request is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Parses raw input text into a login.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::EmptyUserName`] when the input is blank and
    /// [`GitHubError::InvalidUserName`] when it contains whitespace, control
    /// characters, or URL delimiters.
    pub fn parse(input: &str) -> Result<Self, GitHubError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GitHubError::EmptyUserName);
        }

        let is_forbidden = |c: char| {
            c.is_whitespace() || c.is_control() || FORBIDDEN_LOGIN_CHARACTERS.contains(&c)
        };
        if trimmed.chars().any(is_forbidden) {
            return Err(GitHubError::InvalidUserName(trimmed.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personal access token wrapper enforcing presence.
///
/// Tokens are optional for this tool; when one is supplied it raises the rate
/// limit from 60 to 5000 requests per hour.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GitHubError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GitHubError::InvalidToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Parsed API base URL, normalised with a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Parses an API base such as `https://api.github.com` or a GitHub
    /// Enterprise `https://ghe.example.com/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidUrl`] when the value is not an absolute
    /// http(s) URL.
    pub fn parse(input: &str) -> Result<Self, GitHubError> {
        let parsed =
            Url::parse(input.trim()).map_err(|error| GitHubError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GitHubError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }

        Ok(Self(String::from(parsed)))
    }

    /// Borrow the base URL as a string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(format!("{GITHUB_API_BASE}/"))
    }
}

/// Locator for one user's repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLocator {
    api_base: ApiBase,
    user: UserName,
}

impl UserLocator {
    /// Creates a locator against the given API base.
    #[must_use]
    pub const fn new(api_base: ApiBase, user: UserName) -> Self {
        Self { api_base, user }
    }

    /// Returns the API base.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the user.
    #[must_use]
    pub const fn user(&self) -> &UserName {
        &self.user
    }

    /// Path of the repository listing endpoint, relative to the API base.
    #[must_use]
    pub fn repos_path(&self) -> String {
        format!("/users/{}/repos", self.user.as_str())
    }
}
