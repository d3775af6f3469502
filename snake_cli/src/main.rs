fn main() -> anyhow::Result<()> {
    snake_cli::run_cli()
}
