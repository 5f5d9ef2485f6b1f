fn main() {
    docbook_frontend::start_app();
}
