//! Main application structure
//!
//! `DiscolorApp` implements `eframe::App`. It owns the editing session and
//! the system clipboard, forwards button clicks to the session with the
//! current text selection, and renders the colored preview.
//!
//! ### UI Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Title                                   │
//! │ [Reset All] [Bold] [Line]               │
//! │ FG  ■ ■ ■ ■ ■ ■ ■ ■                     │
//! │ BG  ■ ■ ■ ■ ■ ■ ■ ■                     │
//! ├─────────────────────────────────────────┤
//! │ Selectable text                         │
//! ├─────────────────────────────────────────┤
//! │ Colored preview                         │
//! ├─────────────────────────────────────────┤
//! │ [Copy text as Discord formatted]        │
//! └─────────────────────────────────────────┘
//! ```

use discolor::palette::{self, PaletteEntry, StyleCategory};
use discolor::ui::{DocumentRenderer, ToEguiColor, UiColors};
use discolor::{Config, EditorSession, NoticeKind, StyleCode, SystemClipboard};
use eframe::egui;
use tracing::{debug, info};

const SWATCH_SIZE: f32 = 32.0;
const COPY_BUTTON_SIZE: [f32; 2] = [250.0, 40.0];

/// The editor window
pub struct DiscolorApp {
    session: EditorSession,
    clipboard: SystemClipboard,
    renderer: DocumentRenderer,
    colors: UiColors,
    config: Config,
    /// Last selection reported by the text area, as character offsets
    selection: Option<(usize, usize)>,
    /// Text typed into the "Load text" box
    load_buffer: String,
    copy_hovered: bool,
}

impl DiscolorApp {
    /// Create the app around an existing session
    pub fn new(config: Config, session: EditorSession) -> Self {
        let colors = UiColors::default();
        let renderer = DocumentRenderer::new(config.ui.font_size as f32, colors.clone());
        Self {
            session,
            clipboard: SystemClipboard::new(),
            renderer,
            colors,
            config,
            selection: None,
            load_buffer: String::new(),
            copy_hovered: false,
        }
    }

    /// Window colors, for installing into the egui context
    pub fn colors(&self) -> &UiColors {
        &self.colors
    }

    fn apply_style(&mut self, code: StyleCode) {
        if self.session.apply_style_from(&self.selection, code) {
            debug!("Applied style {} to {:?}", code, self.selection);
        }
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal_wrapped(|ui| {
                ui.heading(egui::RichText::new("Discolor's Discord").size(30.0).strong());
                ui.heading(
                    egui::RichText::new("Colored")
                        .size(30.0)
                        .strong()
                        .color(self.colors.accent),
                );
                ui.heading(egui::RichText::new("Text Generator").size(30.0).strong());
            });
            ui.add_space(16.0);
            ui.label(egui::RichText::new("Create your text").size(22.0).strong());
        });
    }

    fn render_modifier_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Reset All").clicked() {
                info!("Resetting all styles");
                self.session.reset();
            }
            for entry in palette::category(StyleCategory::Modifier) {
                let label = match entry.code {
                    StyleCode::UNDERLINE => "Line",
                    _ => entry.name,
                };
                if ui.button(label).clicked() {
                    self.apply_style(entry.code);
                }
            }
        });
    }

    fn render_swatch_row(&mut self, ui: &mut egui::Ui, label: &str, category: StyleCategory) {
        ui.horizontal(|ui| {
            ui.add_sized(
                [30.0, SWATCH_SIZE],
                egui::Label::new(egui::RichText::new(label).size(18.0)),
            );
            let entries: Vec<&PaletteEntry> = palette::category(category).collect();
            for entry in entries {
                let fill = entry.to_egui().unwrap_or(self.colors.button);
                let mut response = ui.add(
                    egui::Button::new("")
                        .fill(fill)
                        .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE)),
                );
                if self.config.ui.show_tooltips {
                    response = response.on_hover_text(swatch_tooltip(entry));
                }
                if response.clicked() {
                    self.apply_style(entry.code);
                }
            }
        });
    }

    fn editor_frame(&self) -> egui::Frame {
        egui::Frame::new()
            .fill(self.colors.editor_background)
            .stroke(egui::Stroke::new(1.0, self.colors.editor_border))
            .corner_radius(4.0)
            .inner_margin(16.0)
    }

    fn render_text_area(&mut self, ui: &mut egui::Ui) {
        let text = self.session.document().flatten_text();
        let mut text_ref: &str = &text;

        self.editor_frame().show(ui, |ui| {
            let output = egui::TextEdit::multiline(&mut text_ref)
                .font(egui::FontId::monospace(self.config.ui.font_size as f32))
                .desired_width(f32::INFINITY)
                .desired_rows(6)
                .frame(egui::Frame::NONE)
                .show(ui);

            if let Some(range) = output.cursor_range {
                let (anchor, head) = (range.secondary.index, range.primary.index);
                self.selection = (anchor != head).then_some((anchor, head));
            }
        });
    }

    fn render_preview(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Preview").strong());
        self.editor_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let mut job = self.renderer.layout_job(self.session.document());
            job.wrap.max_width = ui.available_width();
            ui.label(job);
        });
    }

    fn render_load_box(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Load text").show(ui, |ui| {
            ui.label("Paste plain text, ANSI text or an exported code block.");
            ui.add(
                egui::TextEdit::multiline(&mut self.load_buffer)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(3),
            );
            if ui.button("Load").clicked() && self.session.load_text(&self.load_buffer).is_ok() {
                self.load_buffer.clear();
                self.selection = None;
                self.session.dismiss_notice();
            }
        });
    }

    fn render_copy_button(&mut self, ui: &mut egui::Ui) {
        let notice = self.session.notice().cloned();
        let copied = matches!(&notice, Some(n) if n.kind == NoticeKind::Copied);

        let (label, fill) = if copied {
            ("Copied!", self.colors.success)
        } else if self.copy_hovered {
            ("Copy text as Discord formatted", self.colors.button_hover)
        } else {
            ("Copy text as Discord formatted", self.colors.button)
        };

        ui.vertical_centered(|ui| {
            let response = ui.add(
                egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                    .fill(fill)
                    .min_size(egui::vec2(COPY_BUTTON_SIZE[0], COPY_BUTTON_SIZE[1])),
            );
            self.copy_hovered = response.hovered();

            if response.clicked() {
                // Failures surface through the session notice
                let _ = self.session.export_to(&mut self.clipboard);
            }

            if let Some(notice) = notice.filter(|n| n.kind == NoticeKind::Error) {
                ui.colored_label(self.colors.error, notice.message);
            }

            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("This is an unofficial tool, not affiliated with Discord.")
                    .small(),
            );
        });
    }
}

/// Hover text for a swatch button, e.g. "Red (#dc322f)"
fn swatch_tooltip(entry: &PaletteEntry) -> String {
    match entry.hex() {
        Some(hex) => format!("{} ({})", entry.name, hex),
        None => entry.name.to_string(),
    }
}

impl eframe::App for DiscolorApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(640.0);
                self.render_title(ui);
                ui.add_space(16.0);
                self.render_modifier_row(ui);
                ui.add_space(8.0);
                self.render_swatch_row(ui, "FG", StyleCategory::Foreground);
                self.render_swatch_row(ui, "BG", StyleCategory::Background);
                ui.add_space(16.0);
                self.render_text_area(ui);
                ui.add_space(8.0);
                self.render_preview(ui);
                ui.add_space(8.0);
                self.render_load_box(ui);
                ui.add_space(16.0);
                self.render_copy_button(ui);
            });
        });

        // Keep repainting until the notice disappears
        if self.session.notice().is_some() {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
