fn main() {
    hr_module_frontend::start();
}
