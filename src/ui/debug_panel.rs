use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::interaction::auto_pickup::PickupPending;
use crate::interaction::{AutoPickupConfig, LocalPlayer};
use crate::item::{DropMotion, DroppedItem, ItemRegistry};
use crate::pose::{PoseConfig, SpinUnit, StackingPolicy};
use crate::registry::block::BlockRegistry;
use crate::render::FrameRenderLedger;
use crate::world::VoxelMap;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the drop inspector: live counts plus editable pose and pickup config.
#[allow(clippy::too_many_arguments)]
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    ledger: Res<FrameRenderLedger>,
    drops: Query<(&DroppedItem, &DropMotion, Has<PickupPending>)>,
    player: Query<&Transform, With<LocalPlayer>>,
    items: Res<ItemRegistry>,
    blocks: Res<BlockRegistry>,
    map: Res<VoxelMap>,
    mut pose: ResMut<PoseConfig>,
    mut pickup: ResMut<AutoPickupConfig>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    // Edit copies so change detection only fires on real edits.
    let mut pose_edit = pose.clone();
    let mut pickup_edit = pickup.clone();

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Drop Inspector");
            ui.separator();

            // --- Performance ---
            egui::CollapsingHeader::new(egui::RichText::new("Performance").strong())
                .default_open(true)
                .show(ui, |ui| {
                    let fps_text = diagnostics
                        .as_ref()
                        .and_then(|d| d.get(&FrameTimeDiagnosticsPlugin::FPS))
                        .and_then(|d| d.smoothed())
                        .map(|v| format!("{v:.1}"))
                        .unwrap_or_else(|| "...".to_string());
                    egui::Grid::new("perf_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("FPS:");
                            ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
                            ui.end_row();
                        });
                });

            // --- Drops ---
            egui::CollapsingHeader::new(egui::RichText::new("Drops").strong())
                .default_open(true)
                .show(ui, |ui| {
                    let total = drops.iter().count();
                    let grounded = drops.iter().filter(|(_, m, _)| m.on_ground).count();
                    let pending = drops.iter().filter(|(_, _, p)| *p).count();
                    let oldest = drops.iter().map(|(d, _, _)| d.age_ticks).max();

                    egui::Grid::new("drops_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Dropped items:");
                            ui.label(format!("{total}"));
                            ui.end_row();

                            ui.label("On ground:");
                            ui.label(format!("{grounded}"));
                            ui.end_row();

                            ui.label("Pickup pending:");
                            ui.label(format!("{pending}"));
                            ui.end_row();

                            ui.label("Oldest (ticks):");
                            ui.monospace(oldest.map_or("-".into(), |a| a.to_string()));
                            ui.end_row();

                            ui.label("Posed this frame:");
                            ui.label(format!("{}", ledger.rendered()));
                            ui.end_row();

                            ui.label("Skipped repeats:");
                            let color = if ledger.skipped() > 0 {
                                egui::Color32::YELLOW
                            } else {
                                egui::Color32::GRAY
                            };
                            ui.colored_label(color, format!("{}", ledger.skipped()));
                            ui.end_row();
                        });
                });

            // --- World ---
            egui::CollapsingHeader::new(egui::RichText::new("World").strong())
                .default_open(false)
                .show(ui, |ui| {
                    egui::Grid::new("world_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Block types:");
                            ui.label(format!("{}", blocks.len()));
                            ui.end_row();

                            ui.label("Item types:");
                            ui.label(format!("{}", items.len()));
                            ui.end_row();

                            ui.label("Placed blocks:");
                            ui.label(format!("{}", map.len()));
                            ui.end_row();

                            ui.label("Player:");
                            match player.single() {
                                Ok(tf) => ui.monospace(format!(
                                    "{:.1}, {:.1}, {:.1}",
                                    tf.translation.x, tf.translation.y, tf.translation.z
                                )),
                                Err(_) => ui.label("none"),
                            };
                            ui.end_row();
                        });
                });

            // --- Pose ---
            egui::CollapsingHeader::new(egui::RichText::new("Pose").strong())
                .default_open(true)
                .show(ui, |ui| {
                    ui.label("Stacking:");
                    ui.horizontal(|ui| {
                        let policy = &mut pose_edit.stacking.policy;
                        ui.radio_value(policy, StackingPolicy::Off, "Off");
                        ui.radio_value(policy, StackingPolicy::RenderCount, "Render count");
                        ui.radio_value(policy, StackingPolicy::Constant, "Constant");
                    });
                    ui.label("Spin unit:");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut pose_edit.spin_unit, SpinUnit::Turns, "Turns");
                        ui.radio_value(&mut pose_edit.spin_unit, SpinUnit::Degrees, "Degrees");
                    });
                    ui.add(
                        egui::Slider::new(&mut pose_edit.flat_height_threshold, 0.0..=1.0)
                            .text("Flat threshold"),
                    );
                });

            // --- Pickup ---
            egui::CollapsingHeader::new(egui::RichText::new("Pickup").strong())
                .default_open(true)
                .show(ui, |ui| {
                    ui.checkbox(&mut pickup_edit.enabled, "Auto pickup");
                    ui.add(
                        egui::Slider::new(&mut pickup_edit.radius_sq, 0.05..=9.0)
                            .text("Radius²"),
                    );
                });
        });

    if pose_edit != *pose {
        *pose = pose_edit;
    }
    if pickup_edit != *pickup {
        *pickup = pickup_edit;
    }
    Ok(())
}
