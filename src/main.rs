fn main() {
    supervisor_recipe::app::cli::run();
}
