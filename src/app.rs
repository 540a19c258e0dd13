use eframe::egui;
use std::path::PathBuf;

use crate::curve::editor::{CurveEditor, EditorUpdate};
use crate::curve::grid;
use crate::curve::presets::CurvePreset;
use crate::error::ToneCurveError;
use crate::image_io;
use crate::processor::ImageProcessor;
use crate::store::CurveStore;

pub struct ToneCurveApp {
    editor: CurveEditor,
    store: CurveStore,
    processor: ImageProcessor,
    source_path: Option<PathBuf>,
    grid_texture: Option<egui::TextureHandle>,
    original_texture: Option<egui::TextureHandle>,
    preview_texture: Option<egui::TextureHandle>,
    preview_size: [usize; 2],
    selected_preset: CurvePreset,
    selected_saved: usize,
    needs_redraw: bool,
    needs_process: bool,
    last_error: Option<String>,
    processing_time_ms: f64,
}

impl ToneCurveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            editor: CurveEditor::new(),
            store: CurveStore::new(),
            processor: ImageProcessor::new(),
            source_path: None,
            grid_texture: None,
            original_texture: None,
            preview_texture: None,
            preview_size: [0, 0],
            selected_preset: CurvePreset::Linear,
            selected_saved: 0,
            needs_redraw: true,
            needs_process: false,
            last_error: None,
            processing_time_ms: 0.0,
        }
    }

    fn apply_update(&mut self, update: EditorUpdate) {
        self.needs_redraw |= update.redraw;
        self.needs_process |= update.reprocess;
    }

    fn report(&mut self, err: ToneCurveError) {
        log::warn!("{err}");
        self.last_error = Some(err.to_string());
    }

    fn open_image(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
            .pick_file()
        {
            match image_io::load_image(&path) {
                Ok(img) => {
                    self.processor.load(img);
                    self.install_image(ctx, Some(path));
                }
                Err(e) => self.report(e),
            }
        }
    }

    /// Upload the freshly loaded source to a texture and queue a
    /// reprocess. Call only after the processor accepted an image.
    fn install_image(&mut self, ctx: &egui::Context, path: Option<PathBuf>) {
        let Some(img) = self.processor.original() else {
            return;
        };
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let texture = ctx.load_texture(
            "original",
            egui::ColorImage::from_rgb([w as usize, h as usize], rgb.as_raw()),
            egui::TextureOptions::LINEAR,
        );
        if let Some(p) = &path {
            log::info!("loaded {} ({w}x{h})", p.display());
        }
        self.original_texture = Some(texture);
        self.source_path = path;
        self.last_error = None;
        self.needs_process = true;
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = &file.path {
                match image_io::load_image(path) {
                    Ok(img) => {
                        self.processor.load(img);
                        self.install_image(ctx, Some(path.clone()));
                    }
                    Err(e) => self.report(e),
                }
            } else if let Some(bytes) = &file.bytes {
                match self.processor.load_from_memory(bytes) {
                    Ok(()) => self.install_image(ctx, None),
                    Err(e) => self.report(e),
                }
            }
        }
    }

    fn save_result(&mut self) {
        let Some(processed) = self.processor.processed() else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .save_file()
        {
            let processed = processed.clone();
            if let Err(e) = image_io::save_image(&processed, &path) {
                self.report(e);
            }
        }
    }

    fn redraw_grid(&mut self, ctx: &egui::Context) {
        let bytes = self.editor.grid_image();
        let color_image =
            egui::ColorImage::from_rgb([grid::GRID_SIZE, grid::GRID_SIZE], &bytes);
        self.grid_texture =
            Some(ctx.load_texture("curve_grid", color_image, egui::TextureOptions::NEAREST));
    }

    fn process_image(&mut self, ctx: &egui::Context) {
        let start = std::time::Instant::now();
        match self.processor.apply_table(self.editor.table()) {
            Ok(()) => {}
            // Curve edits with no image loaded have nothing to process.
            Err(ToneCurveError::NotLoaded) => return,
            Err(e) => {
                self.report(e);
                return;
            }
        }
        if let Some(processed) = self.processor.processed() {
            let (w, h) = processed.dimensions();
            self.preview_size = [w as usize, h as usize];
            let color_image =
                egui::ColorImage::from_gray([w as usize, h as usize], processed.as_raw());
            self.preview_texture =
                Some(ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR));
        }
        self.processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    }

    /// The 256x256 editing grid. Drag gestures go through the editor's
    /// state machine; the widget itself only maps pointer positions to
    /// grid coordinates.
    fn curve_widget(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(grid::GRID_SIZE as f32, grid::GRID_SIZE as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

        if let Some(tex) = &self.grid_texture {
            ui.painter().image(
                tex.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        let grid_pos = response
            .interact_pointer_pos()
            .map(|pos| ((pos.x - rect.left()) as i32, (pos.y - rect.top()) as i32));

        let update = if response.drag_started() {
            grid_pos.map(|(x, y)| self.editor.on_drag_start(x, y))
        } else if response.dragged() {
            grid_pos.map(|(x, y)| self.editor.on_drag_move(x, y))
        } else if response.drag_stopped() {
            Some(self.editor.on_drag_end())
        } else {
            None
        };
        self.apply_update(update.unwrap_or_default());
    }
}

impl eframe::App for ToneCurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Top panel: file operations and status
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image").clicked() {
                    self.open_image(ctx);
                }
                if ui.button("Save Result").clicked() {
                    self.save_result();
                }
                ui.separator();
                if self.source_path.is_some() {
                    ui.label(format!(
                        "{}x{} | {:.1}ms",
                        self.preview_size[0], self.preview_size[1], self.processing_time_ms
                    ));
                }
                if let Some(err) = &self.last_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
            });
        });

        // Left panel: curve grid and curve controls
        egui::SidePanel::left("curve_panel")
            .exact_width(280.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Tone curve (drag to edit)");
                self.curve_widget(ui);
                ui.separator();

                egui::ComboBox::from_label("Preset")
                    .selected_text(self.selected_preset.name())
                    .show_ui(ui, |ui| {
                        for &preset in CurvePreset::ALL {
                            if ui
                                .selectable_value(&mut self.selected_preset, preset, preset.name())
                                .clicked()
                            {
                                let update = self.editor.apply_preset(preset);
                                self.apply_update(update);
                            }
                        }
                    });
                if ui.button("Reset").clicked() {
                    let update = self.editor.reset();
                    self.apply_update(update);
                }

                ui.separator();
                if ui.button("Save Curve").clicked() {
                    self.store.save(self.editor.table());
                    self.selected_saved = self.store.len() - 1;
                }
                if !self.store.is_empty() {
                    egui::ComboBox::from_label("Saved")
                        .selected_text(format!("Curve {}", self.selected_saved))
                        .show_ui(ui, |ui| {
                            for i in 0..self.store.len() {
                                ui.selectable_value(
                                    &mut self.selected_saved,
                                    i,
                                    format!("Curve {i}"),
                                );
                            }
                        });
                    if ui.button("Load Saved").clicked() {
                        match self.store.load(self.selected_saved) {
                            Ok(table) => {
                                let table = table.clone();
                                let update = self.editor.set_table(table);
                                self.apply_update(update);
                            }
                            Err(e) => self.report(e),
                        }
                    }
                }
            });

        if self.needs_redraw {
            self.redraw_grid(ctx);
            self.needs_redraw = false;
        }
        if self.needs_process {
            self.process_image(ctx);
            self.needs_process = false;
        }

        // Central panel: original and processed previews
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.original_texture.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label("Open an image to begin");
                });
                return;
            }
            egui::ScrollArea::both().show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    let img_w = self.preview_size[0] as f32;
                    let img_h = self.preview_size[1] as f32;
                    let available = ui.available_size();
                    let scale = if img_w > 0.0 && img_h > 0.0 {
                        f32::min(available.x / (img_w * 2.0), available.y / img_h).min(1.0)
                    } else {
                        1.0
                    };
                    let display_size = egui::vec2(img_w * scale, img_h * scale);
                    if let Some(tex) = &self.original_texture {
                        ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
                    }
                    if let Some(tex) = &self.preview_texture {
                        ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
                    }
                });
            });
        });
    }
}
