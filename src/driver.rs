pub mod config;
pub mod downstream;
pub mod files;

use self::config::{Args, CliArgs, DriverUntil};
use crate::translate::Translator;
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

pub fn driver_main() -> Result<()> {
    env_logger::init();

    let args = Args::from(CliArgs::parse());

    translate(&args)?;
    log::info!("Translator done -> {:?}", args.asm_filepath);

    if args.until == DriverUntil::Executable {
        let prog_filepath = downstream::assemble_and_link(&args.asm_filepath)?;
        log::info!("Assembler and linker done -> {prog_filepath:?}");
    }

    Ok(())
}

fn translate(args: &Args) -> Result<()> {
    let src_file = File::open(&args.src_filepath as &PathBuf)
        .with_context(|| format!("Failed to open {:?}", args.src_filepath))?;
    let asm_file = File::create(&args.asm_filepath as &PathBuf)
        .with_context(|| format!("Failed to create {:?}", args.asm_filepath))?;

    Translator::new()
        .translate(BufReader::new(src_file), BufWriter::new(asm_file))
        .with_context(|| format!("Failed to translate {:?}", args.src_filepath))
}
