fn main() {
    clientgen::app::cli::run();
}
