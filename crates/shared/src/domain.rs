use serde::{Deserialize, Serialize};

pub const DEFAULT_TONE: &str = "random";

/// Style selector sent with a generation request.
///
/// The backend owns the set of tones it understands, so any string is
/// accepted here and forwarded untouched. [`TONE_OPTIONS`] lists the tones
/// the backend is known to offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tone(pub String);

impl Tone {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn random() -> Self {
        Self(DEFAULT_TONE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Catalog entry for this tone, if the backend is known to offer it.
    pub fn option(&self) -> Option<&'static ToneOption> {
        TONE_OPTIONS.iter().find(|option| option.value == self.0)
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneOption {
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub const TONE_OPTIONS: &[ToneOption] = &[
    ToneOption {
        value: "wholesome",
        label: "Wholesome",
        emoji: "💖",
        description: "Heartwarming and comforting",
    },
    ToneOption {
        value: "funny",
        label: "Funny",
        emoji: "😂",
        description: "Quirky and comedic",
    },
    ToneOption {
        value: "dark",
        label: "Dark",
        emoji: "🖤",
        description: "Mysterious and angsty",
    },
    ToneOption {
        value: "emotional",
        label: "Emotional",
        emoji: "🥺",
        description: "Deep and meaningful",
    },
    ToneOption {
        value: "random",
        label: "Random",
        emoji: "🎲",
        description: "Mix of all tones",
    },
];

pub const POPULAR_FANDOMS: &[&str] = &[
    "Anime/Manga",
    "Harry Potter",
    "Marvel",
    "DC Comics",
    "Star Wars",
    "Lord of the Rings",
    "Stranger Things",
    "Game of Thrones",
    "Percy Jackson",
    "Attack on Titan",
    "My Hero Academia",
    "Demon Slayer",
    "Naruto",
    "One Piece",
    "Genshin Impact",
    "Minecraft",
    "The Hunger Games",
    "Twilight",
    "Disney",
    "Studio Ghibli",
    "K-Pop",
    "Video Games",
    "Books/Literature",
    "Movies/Cinema",
    "TV Shows",
    "Original Characters",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tone_is_random() {
        assert_eq!(Tone::default().as_str(), "random");
        assert_eq!(Tone::default().option().map(|o| o.label), Some("Random"));
    }

    #[test]
    fn unknown_tone_is_kept_verbatim() {
        let tone = Tone::new("melancholic");
        assert_eq!(tone.as_str(), "melancholic");
        assert!(tone.option().is_none());
        assert_eq!(
            serde_json::to_string(&tone).expect("serialize"),
            "\"melancholic\""
        );
    }
}
