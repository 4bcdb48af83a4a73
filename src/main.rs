use roommate_compat::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
