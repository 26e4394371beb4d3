use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{POPULAR_FANDOMS, TONE_OPTIONS};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    anchors::Section,
    clipboard::ClipboardWriter,
    events::{err_label, UiError, UiErrorContext, UiEvent},
    faq::FAQ_ITEMS,
    form::FormValues,
    view::GeneratorView,
    HeadcanonController,
};
use crate::ui::view_model::{GeneratorViewModel, OutputState};

const ERROR_ACCENT: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const CARD_WIDTH: f32 = 640.0;

#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub struct HeadcanonApp {
    ui_rx: Receiver<UiEvent>,
    controller: HeadcanonController<GeneratorViewModel, Sender<BackendCommand>>,
    form: FormValues,
    server_url: String,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl HeadcanonApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        clipboard: Box<dyn ClipboardWriter>,
        server_url: String,
    ) -> Self {
        Self {
            ui_rx,
            controller: HeadcanonController::new(GeneratorViewModel::new(), cmd_tx, clipboard),
            form: FormValues {
                tone: Some(shared::domain::DEFAULT_TONE.to_string()),
                ..FormValues::default()
            },
            server_url,
            status: "Starting backend worker...".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::GenerationSettled { request, outcome } => {
                    tracing::debug!(
                        character = %request.character,
                        success = outcome.is_success(),
                        "generation settled"
                    );
                    self.status = match UiError::from_outcome(&outcome) {
                        Some(err) => format!("{}: {}", err_label(err.category()), err.message()),
                        None => format!("Generated headcanons for {}", request.character),
                    };
                    self.controller.on_generation_settled(outcome);
                }
                UiEvent::Error(err) => {
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                    if err.context() == UiErrorContext::BackendStartup {
                        self.status_banner = Some(StatusBanner {
                            message: err.message().to_string(),
                        });
                    }
                }
            }
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(111, 53, 53))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // The brand link is a bare "#" placeholder and never scrolls.
                if ui.link(egui::RichText::new("🎭 Headcanon Generator").strong()).clicked() {
                    self.controller.smooth_scroll_to("#");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for section in Section::NAVIGABLE.iter().rev() {
                        if ui.link(section.label()).clicked() {
                            self.controller.smooth_scroll_to(section.anchor());
                        }
                    }
                });
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(&self.server_url).weak());
                });
            });
        });
    }

    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, title: &str) {
        let response = ui.heading(title);
        if self.controller.anchors_mut().take_for(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }
    }

    fn show_generator_form(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, Section::Generator, "Create headcanons for any character");
        ui.weak("Pick a character, optionally a fandom and a tone, and let the generator dream up details.");
        ui.add_space(10.0);

        ui.label(egui::RichText::new("Character name").strong());
        let character_response = ui.add_sized(
            [ui.available_width(), 34.0],
            egui::TextEdit::singleline(&mut self.form.character_name)
                .id_salt("character_name")
                .hint_text("e.g. Zuko, Hermione Granger, Levi"),
        );
        if self.controller.view_mut().take_focus_request() {
            character_response.request_focus();
        }
        let submit_on_enter = character_response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(6.0);
        ui.label(egui::RichText::new("Fandom").strong());
        ui.horizontal(|ui| {
            let selected = if self.form.fandom_select.is_empty() {
                "Select a fandom (optional)".to_string()
            } else {
                self.form.fandom_select.clone()
            };
            egui::ComboBox::from_id_salt("fandom_select")
                .selected_text(selected)
                .width(220.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.form.fandom_select, String::new(), "None");
                    for fandom in POPULAR_FANDOMS {
                        ui.selectable_value(
                            &mut self.form.fandom_select,
                            fandom.to_string(),
                            *fandom,
                        );
                    }
                });
            ui.add(
                egui::TextEdit::singleline(&mut self.form.fandom_custom)
                    .id_salt("fandom_custom")
                    .hint_text("...or type your own")
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(6.0);
        ui.label(egui::RichText::new("Tone").strong());
        ui.horizontal_wrapped(|ui| {
            for option in TONE_OPTIONS {
                ui.radio_value(
                    &mut self.form.tone,
                    Some(option.value.to_string()),
                    format!("{} {}", option.emoji, option.label),
                )
                .on_hover_text(option.description);
            }
        });

        ui.add_space(10.0);
        let generating = self.controller.view().is_generating();
        let mut clicked = false;
        ui.horizontal(|ui| {
            let button = egui::Button::new(
                egui::RichText::new(self.controller.view().generate_label())
                    .strong()
                    .size(16.0),
            )
            .min_size(egui::vec2(ui.available_width() - 28.0, 40.0));
            clicked = ui.add_enabled(!generating, button).clicked();
            if generating {
                ui.spinner();
            }
        });

        if clicked || submit_on_enter {
            self.controller.submit(&self.form);
        }
    }

    fn show_output(&mut self, ui: &mut egui::Ui, now: Instant) {
        if !self.controller.view().is_output_visible() {
            return;
        }

        let heading = match self.controller.view().output() {
            OutputState::Error { .. } => self.controller.view().character_label().to_string(),
            _ => format!("Headcanons for {}", self.controller.view().character_label()),
        };
        let response = ui.heading(heading);
        let scroll_requested = self.controller.view_mut().take_scroll_request()
            | self.controller.anchors_mut().take_for(Section::Output);
        if scroll_requested {
            response.scroll_to_me(None);
        }

        match self.controller.view().output() {
            OutputState::Hidden => {}
            OutputState::Headcanons { items, .. } => {
                for item in items {
                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(item);
                        });
                }
            }
            OutputState::Error { message } => {
                egui::Frame::NONE
                    .fill(ERROR_ACCENT.gamma_multiply(0.15))
                    .stroke(egui::Stroke::new(1.0, ERROR_ACCENT))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(message).color(ERROR_ACCENT));
                    });
            }
        }

        ui.add_space(6.0);
        let can_copy = self.controller.view().displayed_headcanons().is_some();
        let can_regenerate = !self.controller.is_generating()
            && self.controller.session().last_request().is_some();
        let mut copy_clicked = false;
        let mut regenerate_clicked = false;
        ui.horizontal(|ui| {
            copy_clicked = ui
                .add_enabled(can_copy, egui::Button::new(self.controller.view().copy_label()))
                .clicked();
            regenerate_clicked = ui
                .add_enabled(can_regenerate, egui::Button::new("🔄 Regenerate"))
                .clicked();
        });
        if copy_clicked {
            self.controller.copy(now);
        }
        if regenerate_clicked {
            self.controller.regenerate();
        }

        if let Some(notice) = self.controller.view().notice().map(str::to_string) {
            ui.horizontal_wrapped(|ui| {
                ui.small(egui::RichText::new(notice).color(ERROR_ACCENT));
                if ui.small_button("Dismiss").clicked() {
                    self.controller.view_mut().clear_notice();
                }
            });
        }
    }

    fn show_how_it_works(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, Section::HowItWorks, "How it works");
        for (step, text) in [
            "Enter the character you want headcanons for.",
            "Optionally narrow it down with a fandom and pick a tone.",
            "Generate, then copy your favourites or regenerate for a fresh batch.",
        ]
        .iter()
        .enumerate()
        {
            ui.label(format!("{}. {text}", step + 1));
        }
    }

    fn show_faq(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, Section::Faq, "Frequently asked questions");
        for (index, item) in FAQ_ITEMS.iter().enumerate() {
            let expanded = self.controller.faq().is_expanded(index);
            let response = egui::CollapsingHeader::new(item.question)
                .id_salt(("faq", index))
                .open(Some(expanded))
                .show(ui, |ui| {
                    ui.label(item.answer);
                });
            if response.header_response.clicked() {
                self.controller.toggle_faq(index);
            }
        }
    }
}

impl eframe::App for HeadcanonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events();
        self.controller.tick(now);

        self.show_nav_bar(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CARD_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.add_space(16.0);
                            self.show_status_banner(ui);
                            self.show_generator_form(ui);
                            ui.add_space(18.0);
                            self.show_output(ui, now);
                            ui.add_space(24.0);
                            ui.separator();
                            self.show_how_it_works(ui);
                            ui.add_space(24.0);
                            ui.separator();
                            self.show_faq(ui);
                            ui.add_space(32.0);
                        });
                    });
                });
        });

        let view = self.controller.view();
        if view.is_generating() || view.is_copy_confirmed() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::clipboard::PlatformOutputClipboard;
    use client_core::GenerationOutcome;
    use crossbeam_channel::bounded;

    fn app() -> (HeadcanonApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let clipboard = Box::new(PlatformOutputClipboard::new(egui::Context::default()));
        let app = HeadcanonApp::new(cmd_tx, ui_rx, clipboard, "http://127.0.0.1:8000".into());
        (app, cmd_rx, ui_tx)
    }

    #[test]
    fn settled_event_clears_loading_state() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.form.character_name = "Zuko".to_string();
        assert!(app.controller.submit(&app.form));

        let request = match cmd_rx.try_recv().expect("queued") {
            BackendCommand::Generate { request } => request,
        };
        ui_tx
            .send(UiEvent::GenerationSettled {
                request,
                outcome: GenerationOutcome::Generated {
                    character: "Zuko".to_string(),
                    headcanons: vec!["Hums while training".to_string()],
                },
            })
            .expect("send");
        app.process_ui_events();

        assert!(!app.controller.is_generating());
        assert_eq!(app.controller.view().character_label(), "Zuko");
        assert_eq!(app.status, "Generated headcanons for Zuko");
    }

    #[test]
    fn startup_failure_raises_banner() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::Error(UiError::backend_startup(
                "backend worker startup failure: no runtime",
            )))
            .expect("send");
        app.process_ui_events();

        assert!(app.status_banner.is_some());
    }

    #[test]
    fn default_form_uses_random_tone() {
        let (app, _cmd_rx, _ui_tx) = app();
        assert_eq!(app.form.tone.as_deref(), Some("random"));
    }
}
