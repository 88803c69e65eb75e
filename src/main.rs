fn main() {
    surplus_market::run();
}
