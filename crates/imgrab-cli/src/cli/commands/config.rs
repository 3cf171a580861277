//! `imgrab config`: show where settings live and what is in effect.

use anyhow::Result;
use imgrab_core::config::{self, ImgrabConfig};

pub fn run_config(cfg: &ImgrabConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
