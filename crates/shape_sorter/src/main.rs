fn main() {
    shape_sorter::run();
}
