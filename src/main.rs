fn main() {
    rigup::app::cli::run();
}
