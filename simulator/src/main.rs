mod driver;
mod signals;

fn main() -> anyhow::Result<()> {
    driver::run()
}
