fn main() -> Result<(), Box<dyn std::error::Error>> {
    dark_lantern::run_scripted_session()
}
