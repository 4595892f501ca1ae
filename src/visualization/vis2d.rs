use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use tracing::info;

use crate::simulation::params::INITIAL_DISK_RADIUS;
use crate::simulation::scenario::Scenario;
use crate::visualization::bounds::view_bound;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Latest snapshot handed from the fixed-step system to the render side
#[derive(Resource)]
struct Frame {
    positions: Vec<(f64, f64)>,
    bound: f64,
}

const WINDOW_SIZE: f32 = 1000.0;
const HALF_EXTENT: f32 = 0.5 * WINDOW_SIZE; // pixels the view bound maps to
const PARTICLE_RADIUS: f32 = 0.75; // pixels

pub fn run_2d(scenario: Scenario) {
    let cfg = scenario.simulator.config();
    info!(
        particles = scenario.simulator.cloud().len(),
        ratio = %format!("{}:{}", cfg.p_radial, cfg.p_tangential),
        "starting Bevy 2D viewer"
    );

    let title = format!("Harmonic ratio {}:{}", cfg.p_radial, cfg.p_tangential);
    let interval = Duration::from_millis(scenario.viewer.interval_ms);
    let positions = scenario.simulator.positions();
    let margin = scenario.viewer.bound_margin;
    let bound = view_bound(&positions, margin).unwrap_or(INITIAL_DISK_RADIUS * margin);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_duration(interval))
        .insert_resource(Frame { positions, bound })
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // the binary owns the global tracing subscriber
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_particles_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, sync_transforms_system)
        .run();
}

fn setup_particles_system(
    mut commands: Commands,
    frame: Res<Frame>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    // One mesh and material shared by every particle
    let mesh = Mesh2dHandle(meshes.add(Circle::new(PARTICLE_RADIUS)));
    let material = materials.add(ColorMaterial::from(Color::WHITE));
    let scale = HALF_EXTENT / frame.bound as f32;

    for (i, &(x, y)) in frame.positions.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_xyz(x as f32 * scale, y as f32 * scale, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut frame: ResMut<Frame>) {
    if scenario.frames_remaining() == 0 {
        return;
    }

    let positions = scenario.simulator.update();
    if let Some(bound) = view_bound(&positions, scenario.viewer.bound_margin) {
        frame.bound = bound;
    }
    frame.positions = positions;

    if scenario.frames_remaining() == 0 {
        info!(
            frames = scenario.simulator.frame(),
            t = scenario.simulator.time(),
            "frame budget spent, holding last frame"
        );
    }
}

fn sync_transforms_system(frame: Res<Frame>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    if !frame.is_changed() {
        return;
    }

    // Axis limits follow the cloud: the bound always maps to the window edge
    let scale = HALF_EXTENT / frame.bound as f32;
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(&(x, y)) = frame.positions.get(*i) {
            transform.translation.x = x as f32 * scale;
            transform.translation.y = y as f32 * scale;
        }
    }
}
