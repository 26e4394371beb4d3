use shared::{domain::Tone, protocol::GenerationRequest};
use thiserror::Error;

/// Raw contents of the generator form as the user left them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub character_name: String,
    pub fandom_select: String,
    pub fandom_custom: String,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("character name is required")]
    MissingCharacter,
}

impl FormValues {
    pub fn to_request(&self) -> Result<GenerationRequest, FormError> {
        let character = self.character_name.trim();
        if character.is_empty() {
            return Err(FormError::MissingCharacter);
        }

        let custom = self.fandom_custom.trim();
        let fandom = if custom.is_empty() {
            self.fandom_select.as_str()
        } else {
            custom
        };

        let tone = self.tone.as_deref().map(Tone::new).unwrap_or_default();

        Ok(GenerationRequest::new(character, fandom, tone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_character_is_rejected() {
        let form = FormValues {
            character_name: "   ".to_string(),
            ..FormValues::default()
        };
        assert_eq!(form.to_request(), Err(FormError::MissingCharacter));
    }

    #[test]
    fn custom_fandom_overrides_dropdown() {
        let form = FormValues {
            character_name: "  Zuko ".to_string(),
            fandom_select: "Naruto".to_string(),
            fandom_custom: " Avatar ".to_string(),
            tone: Some("funny".to_string()),
        };
        let request = form.to_request().expect("request");
        assert_eq!(request.character, "Zuko");
        assert_eq!(request.fandom, "Avatar");
        assert_eq!(request.tone.as_str(), "funny");
    }

    #[test]
    fn falls_back_to_dropdown_then_empty_fandom() {
        let mut form = FormValues {
            character_name: "Zuko".to_string(),
            fandom_select: "Naruto".to_string(),
            ..FormValues::default()
        };
        assert_eq!(form.to_request().expect("request").fandom, "Naruto");

        form.fandom_select.clear();
        assert_eq!(form.to_request().expect("request").fandom, "");
    }

    #[test]
    fn missing_tone_defaults_to_random() {
        let form = FormValues {
            character_name: "Zuko".to_string(),
            ..FormValues::default()
        };
        assert_eq!(form.to_request().expect("request").tone.as_str(), "random");
    }
}
