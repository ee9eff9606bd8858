use crate::driver::files::{AsmFilepath, ObjectFilepath, ProgramFilepath};
use anyhow::{Context, Result, anyhow};
use std::process::Command;

/// Assembles the emitted text with nasm, then links the object with gcc.
/// Acceptance of the emitted text is the toolchain's business, not ours.
pub fn assemble_and_link(asm_filepath: &AsmFilepath) -> Result<ProgramFilepath> {
    let obj_filepath = ObjectFilepath::from(asm_filepath);
    let prog_filepath = ProgramFilepath::from(asm_filepath);

    let mut cmd = Command::new("nasm");
    cmd.args([
        "-f",
        object_format()?,
        asm_filepath.to_str().unwrap(),
        "-o",
        obj_filepath.to_str().unwrap(),
    ]);
    run(cmd, "assembler")?;

    let mut cmd = Command::new("gcc");
    cmd.args([
        obj_filepath.to_str().unwrap(),
        "-o",
        prog_filepath.to_str().unwrap(),
    ]);
    run(cmd, "linker")?;

    Ok(prog_filepath)
}

fn object_format() -> Result<&'static str> {
    if cfg!(target_os = "linux") {
        Ok("elf64")
    } else if cfg!(target_os = "macos") {
        Ok("macho64")
    } else if cfg!(target_os = "windows") {
        Ok("win64")
    } else {
        Err(anyhow!("Unsupported operating system."))
    }
}

fn run(mut cmd: Command, descr: &str) -> Result<()> {
    log::info!("{descr} command: {cmd:?}");

    let mut child = cmd
        .spawn()
        .with_context(|| format!("Failed to launch the {descr} process."))?;
    let child_exit_status = child
        .wait()
        .with_context(|| format!("The {descr} process was not running."))?;
    assert!(
        child_exit_status.success(),
        "The {descr} exit status = {child_exit_status}",
    );

    Ok(())
}
