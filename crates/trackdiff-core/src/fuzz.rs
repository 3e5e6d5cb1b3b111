//! Deterministic generators for property-testing the matcher.
//!
//! A diff spec is a string over `{a, b, c, d}` applied to a source string
//! left to right:
//!
//! - `c` keeps the next source character
//! - `b` drops the next source character
//! - `d` emits the next source character without consuming it
//! - `a` inserts a novel character (cycling through `0-9`)
//!
//! Novel characters are digits so they never collide with the lowercase
//! alphabets used for sources.

/// Default source alphabet for generated strings.
pub const DEFAULT_ALPHABET: &str = "abcdef";

const NOVEL_CHARS: &[u8] = b"0123456789";

/// Seeded xorshift64 generator. Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct FuzzRng {
    state: u64,
}

impl FuzzRng {
    /// A zero seed is replaced with 1 to avoid the all-zero fixed point.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-ish value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_usize(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be non-zero");
        (self.next_u64() % bound as u64) as usize
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

/// `len` characters drawn from `alphabet`.
///
/// # Panics
///
/// Panics if `alphabet` is empty and `len > 0`.
pub fn random_string(rng: &mut FuzzRng, alphabet: &str, len: usize) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    (0..len)
        .map(|_| symbols[rng.next_usize(symbols.len())])
        .collect()
}

/// A diff spec that consumes exactly `source_len` source characters.
///
/// Each source character is kept, dropped or duplicated (`dc`), and novel
/// insertions are sprinkled in between.
pub fn random_diff_spec(rng: &mut FuzzRng, source_len: usize) -> String {
    let mut spec = String::new();
    for _ in 0..source_len {
        while rng.next_usize(4) == 0 {
            spec.push('a');
        }
        match rng.next_usize(8) {
            0 | 1 => spec.push('b'),
            2 => spec.push_str("dc"),
            _ => spec.push('c'),
        }
    }
    if rng.next_bool() {
        spec.push('a');
    }
    spec
}

/// Apply a diff spec to `source`.
///
/// Unknown spec characters are ignored. `b`, `c` and `d` past the end of
/// the source do nothing. Source characters left over when the spec ends
/// are kept.
pub fn apply_diff_spec(source: &str, spec: &str) -> String {
    let source: Vec<char> = source.chars().collect();
    let mut out = String::new();
    let mut cursor = 0;
    let mut novel = 0;

    for op in spec.chars() {
        match op {
            'a' => {
                out.push(char::from(NOVEL_CHARS[novel % NOVEL_CHARS.len()]));
                novel += 1;
            }
            'b' if cursor < source.len() => cursor += 1,
            'c' if cursor < source.len() => {
                out.push(source[cursor]);
                cursor += 1;
            }
            'd' if cursor < source.len() => out.push(source[cursor]),
            _ => {}
        }
    }
    out.extend(&source[cursor..]);
    out
}

/// A random source of up to `max_len` characters and a target derived from
/// it by a random diff spec.
pub fn random_pair(rng: &mut FuzzRng, alphabet: &str, max_len: usize) -> (String, String) {
    let len = rng.next_usize(max_len + 1);
    let source = random_string(rng, alphabet, len);
    let spec = random_diff_spec(rng, len);
    let target = apply_diff_spec(&source, &spec);
    (source, target)
}
