fn main() {
    let command = dark_lantern::RunGuiCommand::new();

    command.execute();
}
