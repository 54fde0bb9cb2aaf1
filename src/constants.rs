//! Buffer and scan-width constants.
//!
//! All invariants verified at compile time via `const` assertions.

/// Buffer length of the reference workload.
pub const BUFFER_SIZE: usize = 512;

/// Width of one wide register (one chunk), in bytes. 256 bits.
pub const LANE_SIZE: usize = 32;

/// Width of one machine word, in bytes.
pub const WORD_SIZE: usize = size_of::<u64>();

// Lane constraints
const _: () = assert!(LANE_SIZE > 0);
const _: () = assert!(
    LANE_SIZE.is_power_of_two(),
    "Lane width must be a power of two"
);
const _: () = assert!(
    LANE_SIZE.is_multiple_of(WORD_SIZE),
    "Portable lane is built from whole words"
);

// Word constraints
const _: () = assert!(WORD_SIZE == 8);

// Reference workload must be admissible to every strategy
const _: () = assert!(BUFFER_SIZE >= LANE_SIZE);
const _: () = assert!(BUFFER_SIZE.is_multiple_of(LANE_SIZE));
const _: () = assert!(BUFFER_SIZE.is_multiple_of(WORD_SIZE));
