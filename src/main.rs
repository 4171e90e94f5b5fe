use avian2d::prelude::*;
use bevy::prelude::*;

mod agent;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hollowgate".to_string(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }),
    )
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        combat::CombatPlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        agent::AgentPlugin,
    ))
    .add_systems(Startup, spawn_camera);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
