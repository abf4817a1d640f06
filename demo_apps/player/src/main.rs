use std::path::PathBuf;

use tessera::app::{AnimationApp, FrameSource, runner};
use tessera::render::HeadlessRenderer;
use tessera::settings::PlayerSettings;

/// Usage: `player [animation-name] [settings.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let animation = args.next();
    let settings_path = args.next();

    let mut settings = match settings_path {
        Some(path) => PlayerSettings::from_json_str(&std::fs::read_to_string(path)?)?,
        None => PlayerSettings {
            data_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            ..PlayerSettings::default()
        },
    };
    if let Some(name) = animation {
        settings.animation = name;
    }

    let renderer = HeadlessRenderer::new(settings.view.width, settings.view.height);
    let source = FrameSource::preferred(&settings);
    let mut app = AnimationApp::load(settings, renderer)?;

    let frames = runner::run_native(&mut app, source, None)?;

    let stats = app.renderer.stats();
    log::info!(
        "Played {frames} frames, last frame drew {} triangles",
        stats.draw_list.len()
    );
    for item in &stats.draw_list {
        if let Some(node) = app.scene.scene.get_node(item.node) {
            log::info!(
                "  {} at {:?} opacity {:.2}",
                node.name,
                item.model_matrix.w_axis.truncate(),
                item.opacity
            );
        }
    }
    Ok(())
}
