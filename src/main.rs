fn main() {
    moviepub::app::cli::run();
}
