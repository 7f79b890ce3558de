use std::io::{self, Read};


/// Largest prime smaller than 2^16; both Adler-32 sums are reduced modulo this value.
pub const MOD_ADLER: u32 = 65521;

/// Largest number of bytes that can be summed before the running sums must be
/// reduced to stay within `u32`.
///
/// This is the largest `n` such that `255 * n * (n + 1) / 2 + (n + 1) * (MOD_ADLER - 1)`
/// fits in 32 bits.
pub const NMAX: usize = 5552;

/// Computes the Adler-32 checksum of `data` in a single pass.
///
/// # Examples
///
/// ```
/// use checksums::adler32;
///
/// assert_eq!(adler32(b""), 1);
/// assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398);
/// ```
#[must_use]
pub fn adler32(data: &[u8]) -> u32 {
    let mut state = Adler32::new();
    state.update(data);
    state.value()
}

/// Incremental Adler-32 state.
///
/// `a` accumulates the byte sum starting from 1 and `b` accumulates the running
/// total of `a`, both modulo [`MOD_ADLER`]. The packed digest is `(b << 16) | a`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Adler32 {
    a: u32,
    b: u32,
    len: u64,
}

impl Adler32 {
    /// Default buffer length used by [`update_reader`](Self::update_reader).
    pub const DEFAULT_READER_BUFFER_LEN: usize = 32 * 1024;

    /// Creates a state representing the checksum of the empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::Adler32;
    ///
    /// let state = Adler32::new();
    /// assert!(state.is_empty());
    /// assert_eq!(state.value(), 1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { a: 1, b: 0, len: 0 }
    }

    /// Resets the state back to the empty-input checksum.
    pub const fn reset(&mut self) {
        self.a = 1;
        self.b = 0;
        self.len = 0;
    }

    /// Number of bytes that contributed to the current state.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes have been observed yet.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Feeds `chunk` into the checksum.
    ///
    /// The modulo reduction is deferred for up to [`NMAX`] bytes at a time,
    /// which produces the same value as reducing after every byte.
    pub fn update(&mut self, chunk: &[u8]) {
        let mut a = self.a;
        let mut b = self.b;

        for block in chunk.chunks(NMAX) {
            for &byte in block {
                a += u32::from(byte);
                b += a;
            }
            a %= MOD_ADLER;
            b %= MOD_ADLER;
        }

        self.a = a;
        self.b = b;
        self.len = self.len.saturating_add(chunk.len() as u64);
    }

    /// Reads `reader` to exhaustion, feeding every byte into the checksum.
    ///
    /// Returns the number of bytes consumed. Interrupted reads are retried.
    pub fn update_reader<R: Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut buffer = vec![0u8; Self::DEFAULT_READER_BUFFER_LEN];
        let mut total = 0u64;
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    self.update(&buffer[..n]);
                    total = total.saturating_add(n as u64);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(total)
    }

    /// Packed checksum value, `(b << 16) | a`.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        (self.b << 16) | self.a
    }

    /// Checksum in the big-endian byte order used by the zlib trailer.
    #[inline]
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; 4] {
        self.value().to_be_bytes()
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Adler32> for u32 {
    #[inline]
    fn from(state: Adler32) -> Self {
        state.value()
    }
}
