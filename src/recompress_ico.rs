use crate::ico::{self, Image};
use eyre::Context as _;
use std::path::Path;

/// Repack icon.ico, substituting exported PNGs for the large images.
#[derive(argh::FromArgs)]
#[argh(subcommand, name = "recompress-ico")]
pub struct Args {}

/// Images narrower than this keep their original payload even when a
/// same-width PNG is present.
const SUBSTITUTE_MIN_WIDTH: u32 = 96;

pub fn main(_args: Args) -> eyre::Result<()> {
    recompress(&std::env::current_dir()?)
}

/// Read `icon.ico` from `dir` and write the repacked `icon-compressed.ico`
/// next to it. Per entry, a file named `<width>.png` replaces the embedded
/// payload if it exists and the width is at least 96 pixels; substituted
/// entries get 1 plane and 32 bits per pixel. The PNG is trusted as-is, its
/// dimensions are not checked against the entry.
pub fn recompress(dir: &Path) -> eyre::Result<()> {
    let source_path = dir.join("icon.ico");
    let source = std::fs::read(&source_path)
        .wrap_err_with(|| format!("failed to read {}", source_path.display()))?;
    let entries = ico::parse_directory(&source)?;

    let mut images = Vec::with_capacity(entries.len());
    for entry in &entries {
        let substitute = dir.join(format!("{}.png", entry.width));
        if entry.width >= SUBSTITUTE_MIN_WIDTH && substitute.is_file() {
            let data = std::fs::read(&substitute)
                .wrap_err_with(|| format!("failed to read {}", substitute.display()))?;
            images.push(Image {
                width: entry.width,
                planes: 1,
                bit_count: 32,
                data,
            });
        } else {
            images.push(Image {
                width: entry.width,
                planes: entry.planes,
                bit_count: entry.bit_count,
                data: ico::payload(&source, entry)?.to_vec(),
            });
        }
    }

    let out_path = dir.join("icon-compressed.ico");
    std::fs::write(&out_path, ico::write_icon(&images))
        .wrap_err_with(|| format!("failed to write {}", out_path.display()))?;

    Ok(())
}
