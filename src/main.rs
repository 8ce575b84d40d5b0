use bevy::prelude::*;
use arc_flow::core::parabola_plugin::{ParabolaPlugin, SceneArcs};
use arc_flow::management::scene_config::ArcScene;
use arc_flow::management::viewer_config::ViewerConfig;
use arc_flow::rendering::bevy_surface::BevySurface;
use arc_flow::rendering::renderer::{draw_scene, remove_parabola};

fn main() {
    // Optional RON scene file as the only argument; the demo arc otherwise.
    let scene = match std::env::args().nth(1) {
        Some(path) => match ArcScene::load(&path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => ArcScene::default(),
    };

    let config = ViewerConfig::new(scene).with_token_from(|key| std::env::var(key).ok());

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,arc_flow=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Arc Flow".into(),
                    resolution: (1280.0, 800.0).into(),
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    app.add_plugins(ParabolaPlugin::new(config));
    app.add_systems(Update, redraw_on_space);

    app.run();
}

// Tear the current arc down and draw the configured scene again.
fn redraw_on_space(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    arcs: Option<Res<SceneArcs>>,
    scene: Res<ArcScene>,
    mut surface: BevySurface,
) {
    if !keys.just_pressed(KeyCode::Space) { return; }

    if let Some(arcs) = arcs {
        if let Err(e) = remove_parabola(&mut surface, arcs.0) {
            error!("[Arc] failed to remove arc: {}", e);
        }
    }

    match draw_scene(&mut surface, &scene) {
        Ok(handles) => commands.insert_resource(SceneArcs(handles)),
        Err(e) => error!("[Arc] failed to redraw scene: {}", e),
    }
}
