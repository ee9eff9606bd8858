use anyhow::Result;

fn main() -> Result<()> {
    nslc::driver::driver_main()
}
