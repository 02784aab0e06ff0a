use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContext, EguiPlugin};
use caption::Caption;
use egui::{Align2, FontId, RichText, Ui};

mod inspector;

#[derive(Default)]
pub struct UiPlugin {
    pub with_inspector: bool,
    pub with_fps: bool,
}

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }
        if self.with_fps && !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin);
        }

        app.insert_resource(UiState {
            show_fps: self.with_fps,
        })
        .add_systems(Update, ui);

        if self.with_inspector {
            app.add_plugins(inspector::Plugin);
        }
    }
}

#[derive(Resource)]
struct UiState {
    show_fps: bool,
}

#[derive(SystemParam)]
struct UiSystems<'w> {
    state: Res<'w, UiState>,
    caption: Res<'w, Caption>,
    diagnostics: Option<Res<'w, DiagnosticsStore>>,
}

fn ui(this: UiSystems, mut q_egui: Query<&mut EguiContext, With<PrimaryWindow>>) {
    let Ok(mut egui) = q_egui.get_single_mut() else {
        return;
    };

    let ctx = egui.get_mut();
    this.toplevel(ctx);
}

impl UiSystems<'_> {
    fn toplevel(&self, ctx: &egui::Context) {
        self.caption(ctx);
        if self.state.show_fps {
            egui::Area::new(egui::Id::new("fps"))
                .anchor(Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
                .interactable(false)
                .show(ctx, |ui| {
                    default_frame().show(ui, |ui| self.fps_display(ui));
                });
        }
    }

    fn caption(&self, ctx: &egui::Context) {
        if self.caption.text.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("caption"))
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&self.caption.text)
                        .font(FontId::proportional(14.0))
                        .color(egui::Color32::from_white_alpha(200)),
                );
            });
    }

    fn fps_display(&self, ui: &mut Ui) {
        let Some(fps) = self
            .diagnostics
            .as_ref()
            .and_then(|store| store.get(&FrameTimeDiagnosticsPlugin::FPS))
        else {
            return;
        };
        if !fps.is_enabled {
            return;
        }
        ui.label(
            fps.average()
                .map(|v| format!("FPS: {v:2.1} Hz"))
                .unwrap_or_else(|| String::from("N/A")),
        );
    }
}

fn default_frame() -> egui::Frame {
    let default_frame = egui::Frame::default();
    let [r, g, b, _] = egui::Visuals::dark().window_fill.to_array();
    default_frame
        .fill(egui::Color32::from_rgba_unmultiplied(r, g, b, 128))
        .rounding(4.0)
        .inner_margin(egui::vec2(8.0, 6.0))
}
