fn main() {
    svcforge::app::cli::run();
}
