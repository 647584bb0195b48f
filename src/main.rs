fn main() {
    hoodmap::mount();
}
