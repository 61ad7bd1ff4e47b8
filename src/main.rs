fn main() -> anyhow::Result<()> {
    app::run()
}
