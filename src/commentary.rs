//! Game-over commentary
//!
//! A one-line street-commentator reaction to the final score. The remote
//! provider is optional: without a credential, or on any failure, a line is
//! picked from a fixed local list. Callers always get a non-empty string.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Local lines used whenever the provider is unavailable
pub const FALLBACK_MESSAGES: [&str; 10] = [
    "Wah! Kya shot tha guru!",
    "Arre bhai, thoda aaram se!",
    "Gully Cricket Legend in the making!",
    "Beta tumse na ho payega...",
    "Oooof! Close one!",
    "Next level skills bhai!",
    "Jalwa hai tumhara yahan!",
    "Focus, Focus! Agli baar pakka goal.",
    "Solid effort, but keeper was awake!",
    "Kya baat hai! Zabardast!",
];

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Something that can react to a finished game
pub trait Commentator {
    fn commentary(&mut self, score: u32, style_points: u32) -> String;
}

/// Picks from [`FALLBACK_MESSAGES`]
#[derive(Debug, Clone)]
pub struct FallbackCommentator {
    rng: Pcg32,
}

impl FallbackCommentator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn pick(&mut self) -> String {
        let i = self.rng.random_range(0..FALLBACK_MESSAGES.len());
        FALLBACK_MESSAGES[i].to_string()
    }
}

impl Commentator for FallbackCommentator {
    fn commentary(&mut self, _score: u32, _style_points: u32) -> String {
        self.pick()
    }
}

/// Prompt sent to the text-generation provider
pub fn prompt(score: u32, style_points: u32) -> String {
    let mood = if score < 3 {
        "The score is low, so roast them gently (e.g. 'Beta tumse na ho payega')."
    } else if score > 10 {
        "The score is high, so praise them like a god (e.g. 'Arre Messi bhai aap yahan?')."
    } else {
        "The score is decent, so cheer them on."
    };
    format!(
        "You are a funny, energetic Indian street football commentator. \
         A player just finished a game of 'Street Striker'. \
         Score: {score} goals. Style Points: {style_points}. \
         Generate a ONE sentence reaction in 'Hinglish' (Hindi + English mix). \
         {mood} Keep it short, punchy, and culturally relevant to Indian street sports."
    )
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// First non-blank text part, trimmed
    fn text(&self) -> Option<String> {
        self.candidates
            .iter()
            .flat_map(|c| &c.content.parts)
            .map(|p| p.text.trim())
            .find(|t| !t.is_empty())
            .map(str::to_string)
    }
}

/// Asks a remote text-generation model, falling back locally on failure
pub struct RemoteCommentator {
    api_key: String,
    endpoint: String,
    fallback: FallbackCommentator,
}

impl RemoteCommentator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback: FallbackCommentator::from_entropy(),
        }
    }

    /// Build from the credential in environment variable `var`
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(Error::MissingApiKey {
                var: var.to_string(),
            }),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackCommentator) -> Self {
        self.fallback = fallback;
        self
    }

    /// One request to the provider
    pub fn fetch(&self, score: u32, style_points: u32) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt(score, style_points),
                }],
            }],
        };

        let response: GenerateResponse = ureq::post(&self.endpoint)
            .set("x-goog-api-key", &self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send_json(&body)?
            .into_json()?;

        response.text().ok_or(Error::EmptyResponse)
    }
}

impl Commentator for RemoteCommentator {
    fn commentary(&mut self, score: u32, style_points: u32) -> String {
        match self.fetch(score, style_points) {
            Ok(text) => text,
            Err(Error::RateLimited) => {
                log::warn!("Commentary quota exceeded (429), using fallback line");
                self.fallback.pick()
            }
            Err(e) => {
                log::error!("Commentary failed: {}", e);
                self.fallback.pick()
            }
        }
    }
}

/// Pick the commentator the settings and environment allow
pub fn commentator_for(settings: &Settings) -> Box<dyn Commentator + Send> {
    if !settings.commentary {
        return Box::new(FallbackCommentator::from_entropy());
    }
    match RemoteCommentator::from_env(&settings.api_key_env) {
        Ok(remote) => Box::new(remote),
        Err(e) => {
            log::info!("Remote commentary disabled: {}", e);
            Box::new(FallbackCommentator::from_entropy())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_always_from_list() {
        let mut c = FallbackCommentator::new(3);
        for score in 0..50 {
            let line = c.commentary(score, score * 2);
            assert!(!line.is_empty());
            assert!(FALLBACK_MESSAGES.contains(&line.as_str()));
        }
    }

    #[test]
    fn test_fallback_seeded_is_repeatable() {
        let mut a = FallbackCommentator::new(11);
        let mut b = FallbackCommentator::new(11);
        for _ in 0..5 {
            assert_eq!(a.pick(), b.pick());
        }
    }

    #[test]
    fn test_unreachable_provider_falls_back() {
        // Nothing listens on the discard port
        let mut remote = RemoteCommentator::new("test-key")
            .with_endpoint("http://127.0.0.1:9/generate")
            .with_fallback(FallbackCommentator::new(5));

        assert!(remote.fetch(4, 20).is_err());
        let line = remote.commentary(4, 20);
        assert!(FALLBACK_MESSAGES.contains(&line.as_str()));
    }

    #[test]
    fn test_missing_key_is_reported() {
        let var = "STREET_STRIKER_TEST_UNSET_KEY";
        let err = RemoteCommentator::from_env(var).err().expect("no key set");
        assert!(matches!(err, Error::MissingApiKey { .. }));
    }

    #[test]
    fn test_disabled_commentary_never_calls_out() {
        let settings = Settings {
            commentary: false,
            ..Settings::default()
        };
        let mut c = commentator_for(&settings);
        let line = c.commentary(12, 40);
        assert!(FALLBACK_MESSAGES.contains(&line.as_str()));
    }

    #[test]
    fn test_prompt_mood_follows_score() {
        assert!(prompt(1, 0).contains("roast"));
        assert!(prompt(11, 0).contains("praise"));
        assert!(prompt(5, 15).contains("Style Points: 15"));
    }

    #[test]
    fn test_response_text_skips_blank_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"  "},{"text":" Jalwa! \n"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Jalwa!"));

        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.text().is_none());
    }
}
