use crate::driver::files::{AsmFilepath, SrcFilepath};
use clap::Parser as ClapParser;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
pub struct CliArgs {
    src_filepath: PathBuf,

    out_filepath: PathBuf,

    #[clap(short = 'S')]
    until_translation: bool,
}

pub struct Args {
    pub src_filepath: SrcFilepath,
    pub asm_filepath: AsmFilepath,
    pub until: DriverUntil,
}
impl From<CliArgs> for Args {
    fn from(cli_args: CliArgs) -> Self {
        let until = if cli_args.until_translation {
            DriverUntil::Translation
        } else {
            DriverUntil::Executable
        };

        Self {
            src_filepath: SrcFilepath::from(cli_args.src_filepath),
            asm_filepath: AsmFilepath::from(cli_args.out_filepath),
            until,
        }
    }
}

#[derive(PartialEq, Eq)]
pub enum DriverUntil {
    Translation,
    Executable,
}
