use clap::{Command, arg};
use pixelhull::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("hullc")
        .about("Pixelhull Command Line Interface.")
        .version("0.1.0")
        .arg(arg!(<FILE> "Sprite file, '.json' pixel records or ASCII art"))
        .arg(arg!(-s --scheme <SCHEME> "Pixel scheme: Px2_0, Px2_1, Px3_1 or Px3_0"))
        .arg(arg!(-c --config <CONFIG> "TOML settings file with a [collider] section"))
        .arg(arg!(-o --obj <OUT> "Write the collider as a Wavefront OBJ file"))
        .arg(arg!(--json "Print the body shape as JSON"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    let mut settings = SynthSettings::default();
    if let Some(config) = matches.get_one::<String>("config") {
        let read = std::fs::read_to_string(config)
            .map_err(SynthError::from)
            .and_then(|contents| settings.read(&contents));
        if let Err(e) = read {
            eprintln!("Error reading settings '{config}': {e}");
            return ExitCode::FAILURE;
        }
    }
    if let Some(name) = matches.get_one::<String>("scheme") {
        settings.scheme = PixelScheme::resolve(name);
    }

    let Some(file) = matches.get_one::<String>("FILE") else {
        return ExitCode::FAILURE;
    };
    let path = PathBuf::from(file);

    let sprite = match Sprite::load(&path) {
        Ok(sprite) => sprite,
        Err(e) => {
            eprintln!("Error loading sprite: {e}");
            return ExitCode::FAILURE;
        }
    };

    let synth = ColliderSynth::new(settings);
    let shape = match synth.body_shape(&sprite) {
        Ok(shape) => shape,
        Err(e) => {
            eprintln!("Error generating collider: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &shape {
        BodyShape::Polygon(collider) => {
            println!(
                "Sprite '{}' ({} pixels, {}): {} vertices, {} triangles, area {:.2}",
                path.display(),
                sprite.len(),
                synth.settings().scheme,
                collider.vertices.len(),
                collider.triangle_count(),
                collider.area()
            );
            if let Some(out) = matches.get_one::<String>("obj") {
                if let Err(e) = std::fs::write(out, collider.to_obj()) {
                    eprintln!("Error writing '{out}': {e}");
                    return ExitCode::FAILURE;
                }
                println!("Wrote {out}");
            }
        }
        BodyShape::Box { width, height } => {
            println!(
                "Sprite '{}' has no outline, using a {width}x{height} box",
                path.display()
            );
        }
    }

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(&shape) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing collider: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
