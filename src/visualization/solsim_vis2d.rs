use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::input::KeyEdges;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{DrawRequest, NVec2, Palette};

/// Tags each drawn entity with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

const CIRCLE_Z: f32 = 0.0;
const SPRITE_Z: f32 = 1.0;

/// Simulation y grows downward, Bevy's grows upward
fn to_world(p: NVec2, z: f32) -> Vec3 {
    Vec3::new(p.x as f32, -(p.y as f32), z)
}

fn to_color(c: Palette) -> Color {
    let [r, g, b] = c.rgb();
    Color::srgb_u8(r, g, b)
}

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} bodies at {} fps",
        scenario.system.bodies.len(),
        scenario.engine.fps
    );

    let window = Window {
        title: scenario.engine.title.clone(),
        resolution: WindowResolution::new(scenario.engine.width as f32, scenario.engine.height as f32),
        ..Default::default()
    };
    let hz = f64::from(scenario.engine.fps);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(hz))
        .insert_resource(scenario)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (keyboard_system, sync_transforms_system, follow_player_system, collision_box_system).chain())
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera, zoomed out by scaling the projection
    let mut camera = Camera2dBundle::default();
    camera.projection.scale = 1.0 / scenario.engine.camera_zoom;
    camera.transform.translation = to_world(scenario.camera_target(), camera.transform.translation.z);
    commands.spawn(camera);

    for request in scenario.draw_requests() {
        match request {
            DrawRequest::Circle { index, center, radius, color } => {
                commands.spawn((
                    MaterialMesh2dBundle {
                        mesh: Mesh2dHandle(meshes.add(Circle::new(radius as f32))),
                        material: materials.add(ColorMaterial::from(to_color(color))),
                        transform: Transform::from_translation(to_world(center, CIRCLE_Z)),
                        ..Default::default()
                    },
                    BodyIndex(index),
                ));
            }
            DrawRequest::Sprite { index, top_left, size } => {
                commands.spawn((
                    SpriteBundle {
                        texture: asset_server.load(scenario.sprite.clone()),
                        sprite: Sprite {
                            custom_size: Some(Vec2::new(size.x as f32, size.y as f32)),
                            anchor: Anchor::TopLeft,
                            ..Default::default()
                        },
                        transform: Transform::from_translation(to_world(top_left, SPRITE_Z)),
                        ..Default::default()
                    },
                    BodyIndex(index),
                ));
            }
        }
    }
}

/// Feed A/D edges straight into the player's latch; the latched bias is
/// applied on every physics step
fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    let edges = KeyEdges {
        left_pressed: keys.just_pressed(KeyCode::KeyA),
        left_released: keys.just_released(KeyCode::KeyA),
        right_pressed: keys.just_pressed(KeyCode::KeyD),
        right_released: keys.just_released(KeyCode::KeyD),
    };
    if edges != KeyEdges::default() {
        let bias = scenario.player.latch.apply(edges);
        log::debug!("input: horizontal bias now {bias}");
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step(KeyEdges::default());
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let requests = scenario.draw_requests();
    for (BodyIndex(i), mut transform) in &mut query {
        let at = requests.iter().find_map(|r| match *r {
            DrawRequest::Circle { index, center, .. } if index == *i => Some(center),
            DrawRequest::Sprite { index, top_left, .. } if index == *i => Some(top_left),
            _ => None,
        });
        if let Some(p) = at {
            transform.translation = to_world(p, transform.translation.z);
        }
    }
}

fn follow_player_system(
    scenario: Res<Scenario>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<BodyIndex>)>,
) {
    let target = scenario.camera_target();
    for mut transform in &mut cameras {
        transform.translation = to_world(target, transform.translation.z);
    }
}

/// Outline the player's collision box while tracing
fn collision_box_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.engine.trace {
        return;
    }
    let rect = scenario.player.bounding_box(&scenario.system);
    let center = to_world(rect.center(), SPRITE_Z).truncate();
    gizmos.rect_2d(center, 0.0, Vec2::new(rect.width as f32, rect.height as f32), Color::srgb(1.0, 0.0, 0.0));
}
