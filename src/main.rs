use icon_scripts::*;

/// icon build scripts
#[derive(argh::FromArgs)]
struct Args {
    #[argh(subcommand)]
    cmd: Cmd,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
pub enum Cmd {
    ExportPngs(export_pngs::Args),
    RecompressIco(recompress_ico::Args),
}

fn main() -> eyre::Result<()> {
    let args: Args = argh::from_env();
    match args.cmd {
        Cmd::ExportPngs(args) => export_pngs::main(args),
        Cmd::RecompressIco(args) => recompress_ico::main(args),
    }
}
