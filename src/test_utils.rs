pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

pub fn proptest_cases(default: u32) -> u32 {
    env_u32("PROPTEST_CASES").unwrap_or(default)
}

/// All-zero buffer with `value` written at `index`.
pub fn buffer_with<const N: usize>(index: usize, value: u8) -> [u8; N] {
    let mut buffer = [0u8; N];
    buffer[index] = value;
    buffer
}
