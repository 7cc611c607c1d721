use crate::display::interface::SessionDisplay;
use crate::library::logger::interface::Logger;
use crate::session::core::{Model, ModelState};
use crate::session::handle::SessionHandle;
use crate::session::render::format_confidence;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x26, 0x3c, 0xaa);

/// Wakes the window whenever the session settles on a new model. The window
/// reads the model itself through its `SessionHandle`.
#[derive(Clone, Default)]
pub struct SessionDisplayGui {
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SessionDisplayGui {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&self, context: egui::Context) {
        if let Ok(mut slot) = self.context.lock() {
            *slot = Some(context);
        }
    }
}

impl SessionDisplay for SessionDisplayGui {
    fn render(&mut self, _model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        let slot = self.context.lock().map_err(|_| "gui context poisoned")?;
        if let Some(context) = slot.as_ref() {
            context.request_repaint();
        }
        Ok(())
    }
}

struct IdentifyWindow {
    session: SessionHandle,
    logger: Arc<dyn Logger + Send + Sync>,
    file_path: String,
    url_text: String,
}

impl IdentifyWindow {
    fn upload(&mut self) {
        if self.file_path.trim().is_empty() {
            self.session.upload_files(vec![]);
            return;
        }

        match std::fs::read(self.file_path.trim()) {
            Ok(bytes) => {
                self.session.upload_files(vec![bytes]);
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Could not read {}: {}", self.file_path, e));
            }
        }
    }

    fn inputs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.file_path).hint_text("Image file path"));
            if ui.button("Upload Image").clicked() {
                self.upload();
            }
        });

        ui.add_space(8.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.url_text)
                .hint_text("Paste image URL")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.session.enter_url(&self.url_text);
        }
    }

    fn results(&mut self, ui: &mut egui::Ui, model: &Model) {
        for (index, result) in model.results.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{}  Confidence level: {}",
                    result.label,
                    format_confidence(result.confidence)
                ));
                if index == 0 {
                    ui.label(egui::RichText::new("Best Guess").strong().color(ACCENT));
                }
            });
        }

        if model.image.is_none() {
            return;
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let identify = ui.add_enabled(
                model.identify_enabled(),
                egui::Button::new("Identify Image").min_size(egui::vec2(160.0, 32.0)),
            );
            if identify.clicked() {
                self.url_text.clear();
                self.session.identify();
            }
            if model.is_busy() {
                ui.spinner();
            }
        });
    }

    fn history(&self, ui: &mut egui::Ui, model: &Model) {
        if model.history.is_empty() {
            return;
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Recent Images").strong().size(24.0).color(ACCENT));
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .show(ui, |ui| {
                for image in model.history.iter() {
                    ui.label(image.to_string());
                }
            });
    }
}

impl eframe::App for IdentifyWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let model = self.session.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            if model.is_bootstrapping() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("Model Loading...");
                    ui.spinner();
                });
                return;
            }

            ui.label(
                egui::RichText::new("Image Identification")
                    .strong()
                    .size(32.0)
                    .color(ACCENT),
            );

            if let Some(notice) = &model.notice {
                ui.colored_label(egui::Color32::RED, notice.to_string());
            }
            if let ModelState::Failed(_) = model.model_state {
                if ui.button("Retry loading model").clicked() {
                    self.session.retry_model_load();
                }
            }

            ui.add_space(8.0);
            self.inputs(ui);

            ui.add_space(16.0);
            match &model.image {
                Some(image) => ui.label(format!("Upload Preview: {}", image)),
                None => ui.label("No image selected"),
            };

            ui.add_space(8.0);
            self.results(ui, &model);
            self.history(ui, &model);
        });
    }
}

/// Blocks the calling thread until the window is closed.
pub fn run_gui(
    display: SessionDisplayGui,
    session: SessionHandle,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 640.0]),
        ..Default::default()
    };

    let window = IdentifyWindow {
        session,
        logger: logger.with_namespace("gui"),
        file_path: String::new(),
        url_text: String::new(),
    };

    eframe::run_native(
        "Image Identification",
        options,
        Box::new(move |cc| {
            display.attach(cc.egui_ctx.clone());
            Box::new(window)
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
