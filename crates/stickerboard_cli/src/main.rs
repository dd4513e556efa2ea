//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stickerboard_core` linkage.
//! - Replay a fixed pan+pinch script so output stays deterministic.

use stickerboard_core::{
    EditorConfig, EditorSession, GestureEvent, GesturePayload, GestureTrack, ProjectRegistry,
    SafeAreaInsets, Viewport,
};

const SCRIPT: &[GestureEvent] = &[
    GestureEvent::Start(GestureTrack::Pan),
    GestureEvent::Start(GestureTrack::Pinch),
    GestureEvent::Update(GesturePayload::Pan { dx: 10.0, dy: 10.0 }),
    GestureEvent::Update(GesturePayload::Pinch { factor: 1.5 }),
    GestureEvent::Update(GesturePayload::Pan { dx: 30.0, dy: 900.0 }),
    GestureEvent::End(GestureTrack::Pinch),
    GestureEvent::End(GestureTrack::Pan),
];

fn main() {
    println!("stickerboard_core ping={}", stickerboard_core::ping());
    println!(
        "stickerboard_core version={}",
        stickerboard_core::core_version()
    );

    if let Err(err) = replay() {
        eprintln!("stickerboard_core replay failed: {err}");
        std::process::exit(1);
    }
}

fn replay() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ProjectRegistry::in_memory();
    let project_id = registry.create_project("smoke")?;
    let viewport = Viewport {
        width: 390.0,
        height: 844.0,
        insets: SafeAreaInsets {
            top: 47.0,
            bottom: 34.0,
            ..SafeAreaInsets::default()
        },
    };
    let mut session =
        EditorSession::open(&registry, project_id, viewport, EditorConfig::default())?;
    let overlay = session.add_overlay("smoke.gif")?;

    for event in SCRIPT {
        if let Some(transform) = session.dispatch(overlay, *event) {
            println!(
                "replay track={} x={} y={} scale={}",
                event.track().as_str(),
                transform.translation.x,
                transform.translation.y,
                transform.scale
            );
        }
    }
    Ok(())
}
