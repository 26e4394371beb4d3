//! "Copy text" capability with two interchangeable strategies.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardStrategy {
    /// Native OS clipboard through arboard.
    System,
    /// Clipboard command emitted through egui's platform output.
    PlatformOutput,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard write failed: {0}")]
    System(#[from] arboard::Error),
}

pub trait ClipboardWriter {
    fn strategy(&self) -> ClipboardStrategy;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn strategy(&self) -> ClipboardStrategy {
        ClipboardStrategy::System
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

pub struct PlatformOutputClipboard {
    ctx: egui::Context,
}

impl PlatformOutputClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardWriter for PlatformOutputClipboard {
    fn strategy(&self) -> ClipboardStrategy {
        ClipboardStrategy::PlatformOutput
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

/// Writes through `primary` and retries once through `fallback` when the
/// primary write fails.
pub struct FallbackClipboard {
    primary: Box<dyn ClipboardWriter>,
    fallback: Box<dyn ClipboardWriter>,
}

impl FallbackClipboard {
    pub fn new(primary: Box<dyn ClipboardWriter>, fallback: Box<dyn ClipboardWriter>) -> Self {
        Self { primary, fallback }
    }
}

impl ClipboardWriter for FallbackClipboard {
    fn strategy(&self) -> ClipboardStrategy {
        self.primary.strategy()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(
                    fallback = ?self.fallback.strategy(),
                    "primary clipboard write failed, retrying: {err}"
                );
                self.fallback.write_text(text)
            }
        }
    }
}

/// Picks the system clipboard when the platform exposes one, otherwise the
/// window's own clipboard output. The window output stays available as a
/// fallback for system clipboard writes that fail later.
pub fn detect_clipboard(ctx: &egui::Context) -> Box<dyn ClipboardWriter> {
    match SystemClipboard::new() {
        Ok(clipboard) => {
            tracing::info!("using system clipboard");
            Box::new(FallbackClipboard::new(
                Box::new(clipboard),
                Box::new(PlatformOutputClipboard::new(ctx.clone())),
            ))
        }
        Err(err) => {
            tracing::warn!("system clipboard unavailable, using window clipboard output: {err}");
            Box::new(PlatformOutputClipboard::new(ctx.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_output_strategy_queues_copy_command() {
        let ctx = egui::Context::default();
        let mut clipboard = PlatformOutputClipboard::new(ctx.clone());
        assert_eq!(clipboard.strategy(), ClipboardStrategy::PlatformOutput);

        let output = ctx.run(egui::RawInput::default(), |_ctx| {
            clipboard.write_text("Headcanons for X:").expect("copy");
        });
        assert!(output
            .platform_output
            .commands
            .iter()
            .any(|cmd| matches!(cmd, egui::OutputCommand::CopyText(text) if text == "Headcanons for X:")));
    }

    struct Unavailable;

    impl ClipboardWriter for Unavailable {
        fn strategy(&self) -> ClipboardStrategy {
            ClipboardStrategy::System
        }

        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::System(arboard::Error::ClipboardOccupied))
        }
    }

    #[test]
    fn failed_system_write_falls_back_to_platform_output() {
        let ctx = egui::Context::default();
        let mut clipboard = FallbackClipboard::new(
            Box::new(Unavailable),
            Box::new(PlatformOutputClipboard::new(ctx.clone())),
        );
        assert_eq!(clipboard.strategy(), ClipboardStrategy::System);

        let output = ctx.run(egui::RawInput::default(), |_ctx| {
            clipboard.write_text("• A").expect("fallback copy");
        });
        assert!(output
            .platform_output
            .commands
            .iter()
            .any(|cmd| matches!(cmd, egui::OutputCommand::CopyText(text) if text == "• A")));
    }

    #[test]
    fn both_strategies_failing_reports_an_error() {
        let mut clipboard = FallbackClipboard::new(Box::new(Unavailable), Box::new(Unavailable));
        assert!(clipboard.write_text("• A").is_err());
    }
}
