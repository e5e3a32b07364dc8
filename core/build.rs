fn main() {
    uniffi::generate_scaffolding("src/subexplore.udl").unwrap();
}
