fn main() {
    apod_viewer::run();
}
