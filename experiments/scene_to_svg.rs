// Convert a JSON scene description into an SVG file.
//
// usage: scene-to-svg <scene.json> <output[.svg]> [options.json]
//
// An options file, when given, replaces the options embedded in the scene.

use log::{error, info};
use nurbs_svg::modules::export::svg::write_svg;
use nurbs_svg::modules::export::ExportOptions;
use nurbs_svg::modules::parse::json::FromJson;
use nurbs_svg::Scene;
use std::env;
use std::process;
use std::time::Instant;

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (scene_path, output_path) = match args {
        [_, scene, output, ..] => (scene, output),
        _ => return Err("usage: scene-to-svg <scene.json> <output[.svg]> [options.json]".into()),
    };

    let start_time = Instant::now();
    let mut scene = Scene::from_json_file(scene_path)?;
    if let Some(options_path) = args.get(3) {
        scene.options = ExportOptions::from_json_file(options_path)?;
        info!("using export options from {}", options_path);
    }

    info!(
        "loaded {} shapes in {} layers from {}",
        scene.shapes().count(),
        scene.layers.len(),
        scene_path
    );

    let written = write_svg(output_path, &scene)?;
    info!(
        "exported {} in {:.2?}",
        written.display(),
        start_time.elapsed()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
