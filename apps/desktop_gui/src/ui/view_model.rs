//! Render-ready state for the generator window, driven by the controller.

use crate::controller::view::GeneratorView;

pub const COPY_LABEL: &str = "📋 Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";
pub const GENERATE_LABEL: &str = "✨ Generate Headcanons";
pub const GENERATING_LABEL: &str = "Generating...";
pub const ERROR_CHARACTER_LABEL: &str = "Error";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputState {
    #[default]
    Hidden,
    Headcanons {
        character: String,
        items: Vec<String>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct GeneratorViewModel {
    generating: bool,
    focus_character: bool,
    output: OutputState,
    scroll_to_output: bool,
    copy_confirmed: bool,
    notice: Option<String>,
}

impl GeneratorViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn output(&self) -> &OutputState {
        &self.output
    }

    pub fn is_output_visible(&self) -> bool {
        self.output != OutputState::Hidden
    }

    /// Heading of the output card: the character name, or "Error".
    pub fn character_label(&self) -> &str {
        match &self.output {
            OutputState::Hidden => "",
            OutputState::Headcanons { character, .. } => character,
            OutputState::Error { .. } => ERROR_CHARACTER_LABEL,
        }
    }

    pub fn generate_label(&self) -> &'static str {
        if self.generating {
            GENERATING_LABEL
        } else {
            GENERATE_LABEL
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copy_confirmed {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    pub fn is_copy_confirmed(&self) -> bool {
        self.copy_confirmed
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_character)
    }

    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_output)
    }
}

impl GeneratorView for GeneratorViewModel {
    fn set_generating(&mut self, generating: bool) {
        self.generating = generating;
    }

    fn focus_character_input(&mut self) {
        self.focus_character = true;
    }

    fn show_headcanons(&mut self, character: &str, headcanons: &[String]) {
        self.output = OutputState::Headcanons {
            character: character.to_string(),
            items: headcanons.to_vec(),
        };
        self.notice = None;
        self.copy_confirmed = false;
    }

    fn show_error(&mut self, message: &str) {
        self.output = OutputState::Error {
            message: message.to_string(),
        };
        self.copy_confirmed = false;
        self.notice = None;
    }

    fn scroll_output_into_view(&mut self) {
        self.scroll_to_output = true;
    }

    fn displayed_headcanons(&self) -> Option<(&str, &[String])> {
        match &self.output {
            OutputState::Headcanons { character, items } => {
                Some((character.as_str(), items.as_slice()))
            }
            _ => None,
        }
    }

    fn set_copy_confirmed(&mut self, confirmed: bool) {
        self.copy_confirmed = confirmed;
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}
