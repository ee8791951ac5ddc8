//! Constants used throughout the MediBot core crate.
//!
//! Endpoint URLs, defaults and fixed prompt/advisory text live here so the binaries and the
//! core agree on them.

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Default base URL of the chat-completion API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default timeout for chat-completion requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default bind address of the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Marker every accepted API key must contain.
pub const API_KEY_MARKER: &str = "sk-";

/// IP geolocation endpoint used for automatic hospital lookup.
pub const IPINFO_URL: &str = "https://ipinfo.io/json";

/// Timeout for the IP geolocation request, in seconds.
pub const IPINFO_TIMEOUT_SECS: u64 = 5;

/// Base URL for maps searches.
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Speaking rate passed to the text-to-speech program, in words per minute.
pub const SPEECH_RATE_WPM: u32 = 170;

/// Reply given when the chat message is blank.
pub const EMPTY_MESSAGE_REPLY: &str = "Please type something.";

/// Client-facing notice when the hosted assistant call fails. The cause is only logged.
pub const ASSISTANT_UNAVAILABLE: &str =
    "The chat assistant is unavailable right now. Please try again later.";

pub const SYSTEM_PROMPT: &str = "\
You are MediBot Pro, an AI health information assistant.

Rules:
- You provide general medical information only.
- You are NOT a real doctor.
- Do NOT diagnose or prescribe exact medicines by brand name.
- Encourage users to see a real doctor for diagnosis and treatment.
- If user describes emergency symptoms (e.g., chest pain, trouble breathing, severe bleeding, unconsciousness),
  advise them to seek IMMEDIATE emergency medical help or call their local emergency number.
- Keep answers simple, clear, and under 200-250 words unless user asks for more detail.
- Always answer in the language the user requests.
";

/// First line of every offline advisory.
pub const ADVISORY_HEADER: &str = "Offline Symptom Check (Not a diagnosis)";

/// Last line of every offline advisory.
pub const ADVISORY_FOOTER: &str =
    "This is only general information. Please consult a qualified doctor for proper diagnosis and treatment.";
