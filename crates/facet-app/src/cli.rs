use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use facet_config::schema::TriangleStyle;

/// facet: small interactive examples of subdivision, lighting and mesh viewing.
#[derive(Parser, Debug)]
#[command(name = "facet", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a filter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Recursively subdivided, twisted triangle.
    Triangle {
        /// How vertices reach the GPU (defaults to `[triangle] style`).
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },
    /// Gouraud-shaded UV sphere rotating over time.
    Sphere,
    /// Phong-shaded mesh viewer; shows the sphere when no files are given.
    Mesh {
        /// OBJ or PLY file to show. Repeat to lay several out in a row.
        #[arg(short = 'm', long = "mesh", value_name = "FILE")]
        meshes: Vec<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Immediate,
    Buffered,
    Object,
}

impl From<StyleArg> for TriangleStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Immediate => TriangleStyle::Immediate,
            StyleArg::Buffered => TriangleStyle::Buffered,
            StyleArg::Object => TriangleStyle::Object,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("facet").chain(args.iter().copied()))
    }

    #[test]
    fn triangle_without_style() {
        let args = parse_from(&["triangle"]).unwrap();
        assert_eq!(args.command, Command::Triangle { style: None });
        assert!(args.config.is_none());
    }

    #[test]
    fn triangle_with_style() {
        let args = parse_from(&["triangle", "--style", "buffered"]).unwrap();
        assert_eq!(
            args.command,
            Command::Triangle {
                style: Some(StyleArg::Buffered)
            }
        );
        assert_eq!(TriangleStyle::from(StyleArg::Buffered), TriangleStyle::Buffered);
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(parse_from(&["triangle", "--style", "retained"]).is_err());
    }

    #[test]
    fn mesh_collects_repeated_files() {
        let args = parse_from(&["mesh", "-m", "bunny.ply", "--mesh", "cube.obj"]).unwrap();
        assert_eq!(
            args.command,
            Command::Mesh {
                meshes: vec![PathBuf::from("bunny.ply"), PathBuf::from("cube.obj")]
            }
        );
    }

    #[test]
    fn mesh_without_files() {
        let args = parse_from(&["mesh"]).unwrap();
        assert_eq!(args.command, Command::Mesh { meshes: Vec::new() });
    }

    #[test]
    fn global_options_after_subcommand() {
        let args = parse_from(&["sphere", "--config", "/tmp/f.toml", "--log-level", "debug"]).unwrap();
        assert_eq!(args.command, Command::Sphere);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/f.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(parse_from(&[]).is_err());
    }
}
