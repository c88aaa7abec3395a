pub mod export_pngs;
pub mod ico;
pub mod recompress_ico;
