use derive_more::Deref;
use std::{borrow::Borrow, path::PathBuf};

#[derive(Deref, Debug)]
pub struct SrcFilepath(PathBuf);
impl From<PathBuf> for SrcFilepath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// The user-chosen output path. Its extension, whatever it is, is what the
/// object and program paths are derived from.
#[derive(Deref, Debug)]
pub struct AsmFilepath(PathBuf);
impl From<PathBuf> for AsmFilepath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

#[derive(Deref, Debug)]
pub struct ObjectFilepath(PathBuf);
impl<A: Borrow<AsmFilepath>> From<A> for ObjectFilepath {
    fn from(asm_filepath: A) -> Self {
        let mut obj_filepath = PathBuf::from(asm_filepath.borrow() as &PathBuf);
        let ext = if cfg!(target_os = "windows") { "obj" } else { "o" };
        obj_filepath.set_extension(ext);
        Self(obj_filepath)
    }
}

#[derive(Deref, Debug)]
pub struct ProgramFilepath(PathBuf);
impl<A: Borrow<AsmFilepath>> From<A> for ProgramFilepath {
    fn from(asm_filepath: A) -> Self {
        let mut prog_filepath = PathBuf::from(asm_filepath.borrow() as &PathBuf);
        let ext = if cfg!(target_os = "windows") { "exe" } else { "" };
        prog_filepath.set_extension(ext);
        Self(prog_filepath)
    }
}
