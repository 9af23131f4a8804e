use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use rand::Rng;

use item_drop_pose::ItemDropPosePlugin;
use item_drop_pose::interaction::{InteractRequested, LocalPlayer};
use item_drop_pose::item::{DropMotion, DroppedItem, ItemRegistry, spawn_dropped_item};
use item_drop_pose::math::block_pos_of;
use item_drop_pose::registry::AppState;
use item_drop_pose::registry::block::{BlockCategory, BlockId, BlockRegistry, FluidTag};
use item_drop_pose::sets::DropSet;
use item_drop_pose::ui::UiPlugin;
use item_drop_pose::world::VoxelMap;

const DEMO_DROPS: usize = 24;
const FALL_SPEED: f32 = 4.0;
const PLAYER_SPEED: f32 = 4.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Item Drop Pose".into(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(ItemDropPosePlugin)
        .add_plugins(UiPlugin)
        .add_systems(Startup, setup)
        .add_systems(OnEnter(AppState::Ready), build_demo_world)
        .add_systems(FixedUpdate, settle_drops.run_if(in_state(AppState::Ready)))
        .add_systems(
            Update,
            (
                move_player.before(DropSet::Pose),
                take_requested_items.after(DropSet::Interaction),
            )
                .run_if(in_state(AppState::Ready)),
        )
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 9.0, 14.0).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn block_color(blocks: &BlockRegistry, id: BlockId) -> Color {
    match (blocks.category(id), blocks.fluid(id)) {
        (_, Some(FluidTag::Water)) => Color::srgba(0.2, 0.4, 0.9, 0.5),
        (_, Some(FluidTag::Lava)) => Color::srgb(0.9, 0.4, 0.1),
        (BlockCategory::SoulSand, _) => Color::srgb(0.35, 0.27, 0.2),
        (BlockCategory::Skull, _) => Color::srgb(0.85, 0.85, 0.8),
        _ => Color::srgb(0.45, 0.32, 0.2),
    }
}

/// Lays out a small floor with the blocks that affect drop poses, then
/// scatters random items above it.
fn build_demo_world(
    mut commands: Commands,
    mut map: ResMut<VoxelMap>,
    blocks: Res<BlockRegistry>,
    items: Res<ItemRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) -> Result {
    map.fill(
        IVec3::new(-8, 0, -8),
        IVec3::new(8, 0, 8),
        blocks.by_name("dirt")?,
    );
    map.fill(
        IVec3::new(2, 0, -3),
        IVec3::new(4, 0, -1),
        blocks.by_name("soul_sand")?,
    );
    map.fill(
        IVec3::new(-6, 1, 2),
        IVec3::new(-4, 1, 4),
        blocks.by_name("water")?,
    );
    map.set(IVec3::new(-3, 1, -3), blocks.by_name("skeleton_skull")?);

    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    for (pos, id) in map.iter() {
        let height = match blocks.fluid(id) {
            Some(_) => 0.9,
            None => blocks.outline_height(id),
        };
        commands.spawn((
            Mesh3d(cube.clone()),
            MeshMaterial3d(materials.add(block_color(&blocks, id))),
            Transform::from_translation(pos.as_vec3() + Vec3::new(0.5, height * 0.5, 0.5))
                .with_scale(Vec3::new(1.0, height, 1.0)),
        ));
    }

    commands.spawn((
        LocalPlayer,
        Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.7, 0.4))),
        Transform::from_xyz(0.5, 1.3, 6.5),
    ));

    let names: Vec<_> = items.iter().map(|(_, def)| def.id.clone()).collect();
    if names.is_empty() {
        warn!("Item catalog is empty, nothing to drop");
        return Ok(());
    }

    let block_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let flat_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0 / 16.0));
    let mut rng = rand::thread_rng();
    for i in 0..DEMO_DROPS {
        let name = &names[rng.gen_range(0..names.len())];
        let position = Vec3::new(
            rng.gen_range(-6.0..6.0),
            rng.gen_range(3.0..6.0),
            rng.gen_range(-6.0..6.0),
        );
        let count = rng.gen_range(1..=64);
        let handles = spawn_dropped_item(&mut commands, &items, name, count, position)?;

        let has_depth = items
            .by_name(name)
            .ok()
            .and_then(|id| items.get(id))
            .is_some_and(|d| d.model.has_depth);
        let hue = (i as f32 * 47.0) % 360.0;
        commands.entity(handles.model).insert((
            Mesh3d(if has_depth {
                block_mesh.clone()
            } else {
                flat_mesh.clone()
            }),
            MeshMaterial3d(materials.add(Color::hsl(hue, 0.6, 0.55))),
        ));
    }
    info!("Demo world ready: {} blocks, {DEMO_DROPS} drops", map.len());
    Ok(())
}

/// Top of the nearest solid outline at or below `pos`, looking one cell down.
fn floor_below(map: &VoxelMap, blocks: &BlockRegistry, pos: Vec3) -> Option<f32> {
    let cell = block_pos_of(pos);
    [cell, cell - IVec3::Y].into_iter().find_map(|c| {
        let top = c.y as f32 + blocks.outline_height(map.get(c));
        (top > c.y as f32 && top <= pos.y + 1e-3).then_some(top)
    })
}

/// Stand-in for host physics: drops fall until they rest on an outline.
fn settle_drops(
    time: Res<Time>,
    map: Res<VoxelMap>,
    blocks: Res<BlockRegistry>,
    mut drops: Query<(&mut Transform, &mut DropMotion), With<DroppedItem>>,
) {
    let step = FALL_SPEED * time.delta_secs();
    for (mut tf, mut motion) in &mut drops {
        let pos = tf.translation;
        let floor = floor_below(&map, &blocks, pos);
        let on_ground = floor.is_some_and(|f| pos.y - f <= step);
        if on_ground {
            if let Some(f) = floor {
                tf.translation.y = f;
            }
        } else if pos.y > -16.0 {
            tf.translation.y -= step;
        }
        motion.on_ground = on_ground;
        let cell = block_pos_of(tf.translation);
        motion.submerged = blocks.fluid(map.get(cell)) == Some(FluidTag::Water);
    }
}

fn move_player(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut player: Query<&mut Transform, With<LocalPlayer>>,
) {
    let Ok(mut tf) = player.single_mut() else {
        return;
    };
    let mut dir = Vec3::ZERO;
    for (key, d) in [
        (KeyCode::KeyW, Vec3::NEG_Z),
        (KeyCode::KeyS, Vec3::Z),
        (KeyCode::KeyA, Vec3::NEG_X),
        (KeyCode::KeyD, Vec3::X),
    ] {
        if keys.pressed(key) {
            dir += d;
        }
    }
    tf.translation += dir.normalize_or_zero() * PLAYER_SPEED * time.delta_secs();
}

/// Host side of the pickup handshake: this demo always accepts.
fn take_requested_items(
    mut commands: Commands,
    mut requests: MessageReader<InteractRequested>,
    drops: Query<&DroppedItem>,
    items: Res<ItemRegistry>,
) {
    for request in requests.read() {
        if let Ok(drop) = drops.get(request.item) {
            info!("Picked up {} x{}", items.name_of(drop.item), drop.count);
            commands.entity(request.item).despawn();
        }
    }
}
