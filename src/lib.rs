#![warn(unused_extern_crates)]
use clap::Parser;
use std::path::{Path, PathBuf};
use textwrap::{fill, Options};

pub mod error;
pub mod glyph;
pub mod map;
pub mod photo;

pub use error::Error;

/// Produce a world map bitmap from a photo or a placeholder drawing.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about)]
pub struct WorldBmpArgs {
    /// Photo to convert; without it, earth.jpg then world.jpg are tried.
    pub input: Option<PathBuf>,
}

pub const OUTPUT_FILE: &str = "world.bmp";

const MAX_COL: usize = 80;
const SUB_COL: usize = 4;
const RULE_COL: usize = 40;

static CANDIDATES: &[&str; 2] = &["earth.jpg", "world.jpg"];

/// Where the output image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An existing file to convert.
    Photo(PathBuf),
    /// An explicitly named file that does not exist.
    Missing(PathBuf),
    /// Nothing to convert; draw the placeholder map.
    Synthetic,
}

/// What ended up in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted { width: u32, height: u32 },
    Synthesized { width: u32, height: u32 },
}

pub(crate) fn report(msg: &str) {
    let sfmt: &str = &" ".repeat(SUB_COL);
    println!(
        "{}",
        fill(
            msg,
            Options::new(MAX_COL)
                .subsequent_indent(sfmt)
                .word_splitter(textwrap::WordSplitter::NoHyphenation)
                .break_words(false)
        )
    );
}

/// Decide the source. An explicit `input` is taken as given (relative paths
/// resolve against `base`); otherwise the candidates are probed in order.
pub fn select_source(input: Option<&Path>, base: &Path) -> Source {
    if let Some(path) = input {
        let full: PathBuf = base.join(path);
        return if full.exists() {
            Source::Photo(full)
        } else {
            Source::Missing(full)
        };
    }

    for name in CANDIDATES.iter() {
        let full: PathBuf = base.join(name);
        log::debug!("probing {}", full.display());
        if full.exists() {
            return Source::Photo(full);
        }
    }

    Source::Synthetic
}

fn synthesize(output: &Path) -> Result<Outcome, Error> {
    let (width, height): (u32, u32) = map::create_world_map(output)?;
    report(&format!(
        "created world map {} ({}x{})",
        output.display(),
        width,
        height
    ));

    Ok(Outcome::Synthesized { width, height })
}

/// Run one selection, conversion and fallback cycle inside `base`, writing
/// the result to `output`. Only a failure to write the placeholder map is
/// returned as an error.
pub fn run(
    input: Option<&Path>,
    base: &Path,
    output: &Path,
) -> Result<Outcome, Error> {
    match select_source(input, base) {
        Source::Photo(path) => {
            report(&format!("found {}, converting", path.display()));
            match photo::convert_photo(&path, output) {
                Ok((width, height)) => {
                    report(&format!(
                        "converted {} -> {}",
                        path.display(),
                        output.display()
                    ));
                    report(&format!("final size: {}x{}", width, height));
                    Ok(Outcome::Converted { width, height })
                }
                Err(err) => {
                    log::debug!("conversion failed: {:?}", err);
                    report(&format!("conversion failed: {}", err));
                    report("falling back to the default world map");
                    synthesize(output)
                }
            }
        }
        Source::Missing(path) => {
            report(&format!("error: {} does not exist", path.display()));
            report("creating the default world map");
            synthesize(output)
        }
        Source::Synthetic => {
            report("no photo found, creating the default world map");
            synthesize(output)
        }
    }
}

pub fn world_bmp(args: &WorldBmpArgs) -> Result<Outcome, Error> {
    let rule: String = "=".repeat(RULE_COL);
    println!("\n{}\nworld map bitmap tool\n{}", rule, rule);

    let base: &Path = Path::new(".");
    run(args.input.as_deref(), base, &base.join(OUTPUT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn args_accept_one_optional_path() {
        let args = WorldBmpArgs::try_parse_from(["world-bmp"]).unwrap();
        assert_eq!(args.input, None);

        let args =
            WorldBmpArgs::try_parse_from(["world-bmp", "photo.jpg"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("photo.jpg")));

        assert!(WorldBmpArgs::try_parse_from(["world-bmp", "a", "b"]).is_err());
    }

    #[test]
    fn explicit_path_is_used_or_reported_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mine.png"), b"").unwrap();

        assert_eq!(
            select_source(Some(Path::new("mine.png")), dir.path()),
            Source::Photo(dir.path().join("mine.png"))
        );
        assert_eq!(
            select_source(Some(Path::new("gone.png")), dir.path()),
            Source::Missing(dir.path().join("gone.png"))
        );
    }

    #[test]
    fn explicit_missing_path_skips_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("earth.jpg"), b"").unwrap();

        assert!(matches!(
            select_source(Some(Path::new("gone.png")), dir.path()),
            Source::Missing(_)
        ));
    }

    #[test]
    fn candidates_are_probed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(select_source(None, dir.path()), Source::Synthetic);

        fs::write(dir.path().join("world.jpg"), b"").unwrap();
        assert_eq!(
            select_source(None, dir.path()),
            Source::Photo(dir.path().join("world.jpg"))
        );

        fs::write(dir.path().join("earth.jpg"), b"").unwrap();
        assert_eq!(
            select_source(None, dir.path()),
            Source::Photo(dir.path().join("earth.jpg"))
        );
    }
}
