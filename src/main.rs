fn main() {
    digitfold::cli::run();
}
