use xshell::*;

/// Rasterize icon.svg into one PNG per target size.
#[derive(argh::FromArgs)]
#[argh(subcommand, name = "export-pngs")]
pub struct Args {}

const BASE_SIZES: [u32; 6] = [16, 24, 32, 48, 64, 128];

pub fn main(_args: Args) -> eyre::Result<()> {
    let sh = Shell::new()?;
    export_pngs(&sh)?;
    Ok(())
}

fn export_pngs(sh: &Shell) -> eyre::Result<()> {
    for size in target_sizes() {
        let png = format!("{size}.png");
        let size = size.to_string();
        cmd!(sh, "inkscape icon.svg -e {png} -C -w {size} -h {size}").run()?;
    }
    Ok(())
}

/// The base sizes plus each of them doubled, deduplicated and ascending.
pub fn target_sizes() -> Vec<u32> {
    let mut sizes: Vec<u32> = BASE_SIZES.iter().flat_map(|&s| [s, s * 2]).collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
