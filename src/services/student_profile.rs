use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::ApiConfig;

/// Shown when a profile has no qualifications
pub const NO_QUALIFICATIONS_TEXT: &str = "No qualifications listed.";

/// Shown when a profile has no experience
pub const NO_EXPERIENCE_TEXT: &str = "No experience listed.";

/// A student profile as returned by the backend
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

impl ProfileRecord {
    /// First and last name joined by a single space, verbatim
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn qualifications_text(&self) -> &str {
        non_empty_or(self.qualifications.as_deref(), NO_QUALIFICATIONS_TEXT)
    }

    pub fn experience_text(&self) -> &str {
        non_empty_or(self.experience.as_deref(), NO_EXPERIENCE_TEXT)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

/// Error type for profile fetches
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetchError {
    /// The service answered with a non-2xx status
    Status { code: u16, text: String },
    /// The request never produced a response
    Transport(String),
    /// The response body was not a valid profile
    Parse(String),
}

impl ProfileFetchError {
    /// True for failures that never reached a usable response
    pub fn is_transport(&self) -> bool {
        matches!(self, ProfileFetchError::Transport(_) | ProfileFetchError::Parse(_))
    }
}

impl std::fmt::Display for ProfileFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ProfileFetchError::Status { code, text } => {
                write!(f, "Profile fetch failed: {} {}", code, text)
            }
            ProfileFetchError::Transport(e) => write!(f, "Profile request failed: {}", e),
            ProfileFetchError::Parse(e) => write!(f, "Failed to parse profile: {}", e),
        }
    }
}

impl std::error::Error for ProfileFetchError {}

/// Anything that can look up a student profile by identifier
#[async_trait(?Send)]
pub trait ProfileSource {
    async fn fetch_profile(&self, identifier: &str) -> Result<ProfileRecord, ProfileFetchError>;
}

/// HTTP client for the student profile endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfileApi {
    base_url: String,
}

impl StudentProfileApi {
    /// Create a client against the default backend
    pub fn new() -> Self {
        Self::with_config(&ApiConfig::default())
    }

    pub fn with_config(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    /// URL of the profile resource; the identifier is sent as one path segment
    pub fn profile_url(&self, identifier: &str) -> String {
        format!(
            "{}/api/student-profile/{}",
            self.base_url,
            urlencoding::encode(identifier)
        )
    }
}

impl Default for StudentProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ProfileSource for StudentProfileApi {
    async fn fetch_profile(&self, identifier: &str) -> Result<ProfileRecord, ProfileFetchError> {
        let url = self.profile_url(identifier);
        log::info!("Fetching student profile from: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ProfileFetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ProfileFetchError::Status {
                code: response.status(),
                text: response.status_text(),
            });
        }

        response
            .json::<ProfileRecord>()
            .await
            .map_err(|e| ProfileFetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ProfileRecord {
        ProfileRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            university: "Cambridge".to_string(),
            qualifications: Some(String::new()),
            experience: Some("Engineer".to_string()),
        }
    }

    #[test]
    fn test_full_name_is_verbatim() {
        assert_eq!(ada().full_name(), "Ada Lovelace");

        let padded = ProfileRecord {
            first_name: " Grace".to_string(),
            last_name: "Hopper ".to_string(),
            ..ada()
        };
        assert_eq!(padded.full_name(), " Grace Hopper ");
    }

    #[test]
    fn test_fallback_text() {
        let profile = ada();
        assert_eq!(profile.qualifications_text(), "No qualifications listed.");
        assert_eq!(profile.experience_text(), "Engineer");

        let empty = ProfileRecord {
            qualifications: None,
            experience: Some(String::new()),
            ..ada()
        };
        assert_eq!(empty.qualifications_text(), NO_QUALIFICATIONS_TEXT);
        assert_eq!(empty.experience_text(), NO_EXPERIENCE_TEXT);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "university": "Cambridge",
            "qualifications": "",
            "experience": "Engineer"
        }"#;
        let profile: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(profile, ada());
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let json = r#"{
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "university": "Cambridge",
            "qualifications": null
        }"#;
        let profile: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(profile.qualifications, None);
        assert_eq!(profile.experience, None);
        assert_eq!(profile.experience_text(), NO_EXPERIENCE_TEXT);
    }

    #[test]
    fn test_deserialize_rejects_missing_required_field() {
        let json = r#"{"first_name": "Ada", "last_name": "Lovelace"}"#;
        assert!(serde_json::from_str::<ProfileRecord>(json).is_err());
    }

    #[test]
    fn test_profile_url() {
        let api = StudentProfileApi::with_config(&ApiConfig::new("http://localhost:3001/"));
        assert_eq!(
            api.profile_url("42"),
            "http://localhost:3001/api/student-profile/42"
        );
        assert_eq!(
            api.profile_url(""),
            "http://localhost:3001/api/student-profile/"
        );
        assert_eq!(
            api.profile_url("a/b c"),
            "http://localhost:3001/api/student-profile/a%2Fb%20c"
        );
    }

    #[test]
    fn test_error_classes() {
        let not_found = ProfileFetchError::Status {
            code: 404,
            text: "Not Found".to_string(),
        };
        assert!(!not_found.is_transport());
        assert_eq!(not_found.to_string(), "Profile fetch failed: 404 Not Found");

        assert!(ProfileFetchError::Transport("offline".to_string()).is_transport());
        assert!(ProfileFetchError::Parse("eof".to_string()).is_transport());
    }
}
