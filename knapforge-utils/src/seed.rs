pub fn seed_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}
