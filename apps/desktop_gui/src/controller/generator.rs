use std::time::{Duration, Instant};

use client_core::{
    format_clipboard_text, GenerationOutcome, GenerationSession, NETWORK_FAILURE_MESSAGE,
};
use shared::protocol::GenerationRequest;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    anchors::AnchorNavigator,
    clipboard::ClipboardWriter,
    faq::FaqAccordion,
    form::FormValues,
    orchestration::CommandSink,
    view::GeneratorView,
};

pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

pub struct HeadcanonController<V, S> {
    view: V,
    commands: S,
    clipboard: Box<dyn ClipboardWriter>,
    session: GenerationSession,
    faq: FaqAccordion,
    anchors: AnchorNavigator,
    copy_confirmed_at: Option<Instant>,
}

impl<V: GeneratorView, S: CommandSink> HeadcanonController<V, S> {
    pub fn new(view: V, commands: S, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            view,
            commands,
            clipboard,
            session: GenerationSession::new(),
            faq: FaqAccordion::default(),
            anchors: AnchorNavigator::default(),
            copy_confirmed_at: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn session(&self) -> &GenerationSession {
        &self.session
    }

    pub fn faq(&self) -> &FaqAccordion {
        &self.faq
    }

    pub fn anchors_mut(&mut self) -> &mut AnchorNavigator {
        &mut self.anchors
    }

    pub fn is_generating(&self) -> bool {
        self.session.is_generating()
    }

    /// Validates the form and starts a generation. A blank character name
    /// sends focus back to the name field and issues nothing.
    pub fn submit(&mut self, form: &FormValues) -> bool {
        match form.to_request() {
            Ok(request) => self.generate(request),
            Err(err) => {
                tracing::debug!("form rejected: {err}");
                self.view.focus_character_input();
                false
            }
        }
    }

    /// Hands `request` to the backend worker unless one is already in flight.
    pub fn generate(&mut self, request: GenerationRequest) -> bool {
        if !self.session.try_begin(request.clone()) {
            tracing::debug!(character = %request.character, "generation already in flight");
            return false;
        }
        self.view.set_generating(true);

        match self.commands.dispatch(BackendCommand::Generate { request }) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("failed to queue generation: {err}");
                self.on_generation_settled(GenerationOutcome::TransportFailed(err.to_string()));
                false
            }
        }
    }

    pub fn on_generation_settled(&mut self, outcome: GenerationOutcome) {
        if self.session.settle(&outcome).is_none() {
            tracing::warn!("generation settled with nothing in flight");
        }
        self.copy_confirmed_at = None;

        match &outcome {
            GenerationOutcome::Generated {
                character,
                headcanons,
            } => {
                self.view.show_headcanons(character, headcanons);
                self.view.scroll_output_into_view();
            }
            GenerationOutcome::Rejected(err) => {
                self.view.show_error(&err.message);
            }
            GenerationOutcome::TransportFailed(detail) => {
                tracing::error!("generation transport failure: {detail}");
                self.view.show_error(NETWORK_FAILURE_MESSAGE);
            }
        }

        self.view.set_generating(false);
    }

    pub fn regenerate(&mut self) -> bool {
        match self.session.last_request().cloned() {
            Some(request) => self.generate(request),
            None => false,
        }
    }

    pub fn copy(&mut self, now: Instant) -> bool {
        let Some(text) = self
            .view
            .displayed_headcanons()
            .map(|(character, headcanons)| format_clipboard_text(character, headcanons))
        else {
            return false;
        };

        match self.clipboard.write_text(&text) {
            Ok(()) => {
                tracing::debug!(strategy = ?self.clipboard.strategy(), "copied headcanons");
                self.view.set_copy_confirmed(true);
                self.copy_confirmed_at = Some(now);
                true
            }
            Err(err) => {
                tracing::warn!("copy failed: {err}");
                self.view.show_notice("Could not copy to the clipboard");
                false
            }
        }
    }

    /// Reverts time-limited visual state. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(confirmed_at) = self.copy_confirmed_at {
            if now.saturating_duration_since(confirmed_at) >= COPY_CONFIRMATION {
                self.copy_confirmed_at = None;
                self.view.set_copy_confirmed(false);
            }
        }
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.faq.toggle(index);
    }

    pub fn smooth_scroll_to(&mut self, href: &str) -> bool {
        self.anchors.navigate(href)
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
