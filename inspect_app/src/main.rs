//! Material library inspector
//!
//! Parses an MTL file and logs a one-line summary for every material it
//! defines. Useful for sanity-checking exported material libraries without
//! opening them in a 3D tool.

use mtl_format::elements::Material;
use mtl_format::Library;
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: mtl_inspect <file.mtl>")?;
    let source = fs::read_to_string(&path)?;
    let library = Library::from_text(&source)?;

    log::info!(
        "{}: {} comment(s), {} material(s)",
        path,
        library.comments().len(),
        library.materials().len()
    );
    for material in library.materials() {
        log::info!("  {}", describe(material));
    }
    Ok(())
}

/// One-line summary of a material's populated attributes.
fn describe(material: &Material) -> String {
    let name = material.name.as_deref().unwrap_or("<unnamed>");
    let colors = [
        material.ambient_color.is_some(),
        material.diffuse_color.is_some(),
        material.specular_color.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();
    let maps = [
        material.ambient_map.is_some(),
        material.diffuse_map.is_some(),
        material.specular_map.is_some(),
        material.transparency_map.is_some(),
        material.bump_map.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();

    match material.illumination {
        Some(illumination) => format!(
            "{name}: {colors} color(s), {maps} map(s), illum {} ({})",
            illumination.ordinal(),
            illumination.description()
        ),
        None => format!("{name}: {colors} color(s), {maps} map(s)"),
    }
}
