//! Line-oriented parser for MTL text

use crate::elements::{BumpMap, Color, Comment, Material, TextureMap};
use crate::error::MtlError;
use crate::illumination::Illumination;
use crate::library::Library;

/// Parse MTL text into a new [`Library`].
///
/// Directives are dispatched line by line. Unrecognized keywords are
/// ignored, as are directives that appear before the first `newmtl`
/// (they have no material to apply to). Comment lines must start with a
/// `#` token separated from the text by whitespace; a `#text` line with no
/// separator is treated as an unrecognized directive.
///
/// # Errors
///
/// Fails on the first malformed number, out-of-range `illum` index or
/// directive with missing arguments. A failure aborts the whole parse;
/// there is no partial result.
pub fn parse(source: &str) -> Result<Library, MtlError> {
    let mut library = Library::new();
    parse_into(source, &mut library)?;
    Ok(library)
}

/// Parse MTL text into an existing [`Library`], reusing its allocations.
///
/// The target's comments and materials are cleared before parsing. On
/// failure the target is left cleared.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn parse_into(source: &str, target: &mut Library) -> Result<(), MtlError> {
    target.clear_comments().clear_materials();
    let mut current: Option<Material> = None;

    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            // A lone keyword has nothing to apply, including a bare `#`.
            continue;
        }
        match tokens[0] {
            "#" => {
                // Remainder after the marker, internal spacing preserved.
                target.add_comment(Comment::new().with_text(line[1..].trim_start()));
            }
            "newmtl" => {
                if let Some(finished) = current.take() {
                    target.add_material(finished);
                }
                current = Some(Material::named(tokens[1]));
            }
            "d" | "Tr" => {
                if let Some(material) = current.as_mut() {
                    material.transparency = Some(parse_float(line_number, tokens[1])?);
                }
            }
            "Ns" => {
                if let Some(material) = current.as_mut() {
                    material.specular_exponent = Some(parse_float(line_number, tokens[1])?);
                }
            }
            "illum" => {
                if let Some(material) = current.as_mut() {
                    material.illumination = Some(parse_illumination(line_number, tokens[1])?);
                }
            }
            "Ka" => {
                if let Some(material) = current.as_mut() {
                    material.ambient_color = Some(parse_color(line_number, &tokens)?);
                }
            }
            "Kd" => {
                if let Some(material) = current.as_mut() {
                    material.diffuse_color = Some(parse_color(line_number, &tokens)?);
                }
            }
            "Ks" => {
                if let Some(material) = current.as_mut() {
                    material.specular_color = Some(parse_color(line_number, &tokens)?);
                }
            }
            "map_Ka" => {
                if let Some(material) = current.as_mut() {
                    material.ambient_map = Some(parse_map(line_number, &tokens)?);
                }
            }
            "map_Kd" => {
                if let Some(material) = current.as_mut() {
                    material.diffuse_map = Some(parse_map(line_number, &tokens)?);
                }
            }
            "map_Ks" => {
                if let Some(material) = current.as_mut() {
                    material.specular_map = Some(parse_map(line_number, &tokens)?);
                }
            }
            "map_d" => {
                if let Some(material) = current.as_mut() {
                    material.transparency_map = Some(parse_map(line_number, &tokens)?);
                }
            }
            "map_Bump" | "bump" => {
                if let Some(material) = current.as_mut() {
                    material.bump_map = Some(parse_bump_map(line_number, &tokens)?);
                }
            }
            keyword => {
                log::trace!("ignoring unrecognized directive `{keyword}` on line {line_number}");
            }
        }
    }
    if let Some(finished) = current.take() {
        target.add_material(finished);
    }

    log::debug!(
        "parsed {} materials and {} comments",
        target.materials().len(),
        target.comments().len()
    );
    Ok(())
}

fn parse_float(line: usize, token: &str) -> Result<f32, MtlError> {
    token.parse().map_err(|_| MtlError::MalformedNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_illumination(line: usize, token: &str) -> Result<Illumination, MtlError> {
    let index = token.parse::<i64>().map_err(|_| MtlError::MalformedNumber {
        line,
        token: token.to_string(),
    })?;
    Illumination::from_ordinal(index).ok_or(MtlError::IlluminationOutOfRange { line, index })
}

fn parse_color(line: usize, tokens: &[&str]) -> Result<Color, MtlError> {
    let component = |index: usize| {
        let token = tokens.get(index).copied().ok_or_else(|| MtlError::MissingArgument {
            line,
            directive: tokens[0].to_string(),
        })?;
        parse_float(line, token)
    };
    Ok(Color::new(component(1)?, component(2)?, component(3)?))
}

/// Modifier flags and file path collected from a map directive's tokens.
struct MapArgs {
    scale: Option<f32>,
    offset: Option<f32>,
    transform: bool,
    intensity: Option<f32>,
    file: String,
}

/// Walk the tokens after the directive keyword. A value flag consumes
/// itself and the following token; `-t` consumes only itself. The first
/// token that is not a recognized flag is the file path.
fn scan_map(line: usize, tokens: &[&str], bump: bool) -> Result<MapArgs, MtlError> {
    let mut args = MapArgs {
        scale: None,
        offset: None,
        transform: false,
        intensity: None,
        file: String::new(),
    };
    let mut cursor = 1;
    loop {
        let Some(&token) = tokens.get(cursor) else {
            return Err(MtlError::MissingArgument {
                line,
                directive: tokens[0].to_string(),
            });
        };
        match token {
            "-s" => {
                args.scale = Some(flag_value(line, tokens, cursor)?);
                cursor += 2;
            }
            "-o" => {
                args.offset = Some(flag_value(line, tokens, cursor)?);
                cursor += 2;
            }
            "-bm" if bump => {
                args.intensity = Some(flag_value(line, tokens, cursor)?);
                cursor += 2;
            }
            "-t" => {
                args.transform = true;
                cursor += 1;
            }
            _ => {
                args.file = token.to_string();
                return Ok(args);
            }
        }
    }
}

fn flag_value(line: usize, tokens: &[&str], cursor: usize) -> Result<f32, MtlError> {
    let token = tokens.get(cursor + 1).copied().ok_or_else(|| MtlError::MissingArgument {
        line,
        directive: tokens[cursor].to_string(),
    })?;
    parse_float(line, token)
}

fn parse_map(line: usize, tokens: &[&str]) -> Result<TextureMap, MtlError> {
    let args = scan_map(line, tokens, false)?;
    let mut map = TextureMap::new(args.file);
    map.scale = args.scale;
    map.offset = args.offset;
    map.transform = args.transform;
    Ok(map)
}

fn parse_bump_map(line: usize, tokens: &[&str]) -> Result<BumpMap, MtlError> {
    let args = scan_map(line, tokens, true)?;
    let mut map = BumpMap::new(args.file);
    map.map.scale = args.scale;
    map.map.offset = args.offset;
    map.map.transform = args.transform;
    map.intensity = args.intensity;
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_material_with_color_and_transparency() {
        let library = parse("newmtl brick\nKd 0.8 0.2 0.1\nd 0.5\n").unwrap();

        assert_eq!(library.materials().len(), 1);
        let brick = library.material("brick").unwrap();
        assert_eq!(brick.diffuse_color, Some(Color::new(0.8, 0.2, 0.1)));
        assert_eq!(brick.transparency, Some(0.5));
        assert_eq!(brick.specular_exponent, None);
        assert_eq!(brick.illumination, None);
        assert_eq!(brick.ambient_color, None);
        assert_eq!(brick.specular_color, None);
        assert_eq!(brick.diffuse_map, None);
        assert_eq!(brick.bump_map, None);
    }

    #[test]
    fn test_comment_and_illumination() {
        let library = parse("# generated\n\nnewmtl a\nillum 2\n").unwrap();

        assert_eq!(library.comments().len(), 1);
        assert_eq!(library.comments()[0].text.as_deref(), Some("generated"));
        let material = library.material("a").unwrap();
        assert_eq!(material.illumination, Some(Illumination::HighlightOn));
        assert_eq!(material.illumination.unwrap().ordinal(), 2);
        assert_eq!(material.illumination.unwrap().description(), "Highlight on");
    }

    #[test]
    fn test_bump_map_flags() {
        let library = parse("newmtl a\nmap_Bump -bm 0.3 -t bump.png\n").unwrap();

        let bump = library.material("a").unwrap().bump_map.as_ref().unwrap();
        assert_relative_eq!(bump.intensity.unwrap(), 0.3);
        assert!(bump.map.transform);
        assert_eq!(bump.map.scale, None);
        assert_eq!(bump.map.offset, None);
        assert_eq!(bump.map.file, "bump.png");
    }

    #[test]
    fn test_flag_order_invariance() {
        let a = parse("newmtl m\nmap_Kd -o 2 -s 1 wood.png\n").unwrap();
        let b = parse("newmtl m\nmap_Kd -s 1 -o 2 wood.png\n").unwrap();

        assert_eq!(
            a.material("m").unwrap().diffuse_map,
            b.material("m").unwrap().diffuse_map
        );
    }

    #[test]
    fn test_unknown_directive_ignored() {
        let library = parse("newmtl a\nKe 1 2 3\n").unwrap();

        assert_eq!(*library.material("a").unwrap(), Material::named("a"));
    }

    #[test]
    fn test_directives_before_newmtl_dropped() {
        // Even a malformed argument is not an error without a material.
        let library = parse("Kd 1 0 0\nd nonsense\nnewmtl a\n").unwrap();

        assert_eq!(library.materials().len(), 1);
        assert_eq!(library.material("a").unwrap().diffuse_color, None);
        assert_eq!(library.material("a").unwrap().transparency, None);
    }

    #[test]
    fn test_illum_boundaries() {
        let library = parse("newmtl a\nillum 0\n").unwrap();
        assert_eq!(
            library.material("a").unwrap().illumination,
            Some(Illumination::ColorOnAmbientOff)
        );

        assert_eq!(
            parse("newmtl a\nillum 11\n"),
            Err(MtlError::IlluminationOutOfRange { line: 2, index: 11 })
        );
        assert_eq!(
            parse("newmtl a\nillum -1\n"),
            Err(MtlError::IlluminationOutOfRange { line: 2, index: -1 })
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            parse("newmtl a\nNs abc\n"),
            Err(MtlError::MalformedNumber {
                line: 2,
                token: "abc".to_string(),
            })
        );
        assert_eq!(
            parse("newmtl a\nillum 2.5\n"),
            Err(MtlError::MalformedNumber {
                line: 2,
                token: "2.5".to_string(),
            })
        );
        assert_eq!(
            parse("newmtl a\nKa 0.1 x 0.3\n"),
            Err(MtlError::MalformedNumber {
                line: 2,
                token: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            parse("newmtl a\nKa 0.1 0.2\n"),
            Err(MtlError::MissingArgument {
                line: 2,
                directive: "Ka".to_string(),
            })
        );
        // All tokens consumed by flags leaves no file path.
        assert_eq!(
            parse("newmtl a\nmap_Kd -s 1\n"),
            Err(MtlError::MissingArgument {
                line: 2,
                directive: "map_Kd".to_string(),
            })
        );
        // A value flag at the end of the line has no value to take.
        assert_eq!(
            parse("newmtl a\nmap_Kd -s\n"),
            Err(MtlError::MissingArgument {
                line: 2,
                directive: "-s".to_string(),
            })
        );
    }

    #[test]
    fn test_transparency_aliases_last_wins() {
        let library = parse("newmtl a\nd 0.25\nTr 0.75\n").unwrap();
        assert_eq!(library.material("a").unwrap().transparency, Some(0.75));
    }

    #[test]
    fn test_bump_directive_aliases() {
        let a = parse("newmtl m\nmap_Bump b.png\n").unwrap();
        let b = parse("newmtl m\nbump b.png\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bm_flag_not_recognized_outside_bump() {
        // For a plain map `-bm` is just an unrecognized token, so it becomes
        // the file path and scanning stops.
        let library = parse("newmtl a\nmap_Kd -bm 0.5 wood.png\n").unwrap();
        assert_eq!(library.material("a").unwrap().diffuse_map.as_ref().unwrap().file, "-bm");
    }

    #[test]
    fn test_single_token_lines_skipped() {
        let library = parse("newmtl\n#\nnewmtl a\n").unwrap();

        assert_eq!(library.comments().len(), 0);
        assert_eq!(library.materials().len(), 1);
        assert_eq!(library.materials()[0].name.as_deref(), Some("a"));
    }

    #[test]
    fn test_comment_requires_separated_marker() {
        // `#text` is not a comment, it is an unknown directive.
        let library = parse("#text here\nnewmtl a\n").unwrap();
        assert_eq!(library.comments().len(), 0);

        let library = parse("#  spaced   out\nnewmtl a\n").unwrap();
        assert_eq!(library.comments().len(), 0);
    }

    #[test]
    fn test_comment_preserves_internal_spacing() {
        let library = parse("# two  spaces   kept\n").unwrap();
        assert_eq!(library.comments()[0].text.as_deref(), Some("two  spaces   kept"));
    }

    #[test]
    fn test_duplicate_material_names_kept_in_order() {
        let library = parse("newmtl a\nd 0.25\nnewmtl a\nd 0.75\n").unwrap();

        assert_eq!(library.materials().len(), 2);
        assert_eq!(library.material("a").unwrap().transparency, Some(0.25));
    }

    #[test]
    fn test_parse_into_clears_target() {
        let mut library = parse("newmtl old\n# old comment\n").unwrap();
        parse_into("newmtl fresh\n", &mut library).unwrap();

        assert_eq!(library.comments().len(), 0);
        assert_eq!(library.materials().len(), 1);
        assert_eq!(library.materials()[0].name.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_round_trip() {
        let source = "# generated by hand\n\
                      # second comment\n\
                      newmtl brick\n\
                      d 0.5\n\
                      Ns 96.25\n\
                      illum 2\n\
                      Ka 0.1 0.1 0.1\n\
                      Kd 0.8 0.2 0.1\n\
                      Ks 1 1 1\n\
                      map_Kd -s 1.5 -o 2 -t wood.png\n\
                      map_Bump -bm 0.3 bump.png\n\
                      newmtl glass\n\
                      Tr 0.1\n\
                      illum 4\n";
        let library = parse(source).unwrap();
        let reparsed = parse(&library.to_text().unwrap()).unwrap();

        assert_eq!(library, reparsed);
    }

    #[test]
    fn test_serialization_idempotent() {
        let source = "newmtl a\nd 0.5\nKa 0.25 0.5 0.75\nmap_d -o 1.25 alpha.png\n";
        let once = parse(source).unwrap().to_text().unwrap();
        let twice = parse(&once).unwrap().to_text().unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_illumination_ordinal_stable_through_round_trip() {
        for model in Illumination::ALL {
            let source = format!("newmtl a\nillum {}\n", model.ordinal());
            let library = parse(&source).unwrap();
            let reparsed = parse(&library.to_text().unwrap()).unwrap();
            assert_eq!(reparsed.material("a").unwrap().illumination, Some(model));
        }
    }

    #[test]
    fn test_windows_line_endings() {
        let library = parse("newmtl a\r\nd 0.5\r\n").unwrap();
        assert_eq!(library.material("a").unwrap().transparency, Some(0.5));
    }
}
