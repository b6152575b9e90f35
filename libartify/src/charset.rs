//! Character ramps and the luminance to glyph quantizer.

/// The built-in ramp, ordered from sparse glyphs to dense glyphs.
///
/// Note the escaped backslash: the ramp contains both `\` and `/`.
pub const DEFAULT_RAMP: &str = " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Glyph returned when a caller hands over an empty ramp.
const FALLBACK_CHAR: char = DEFAULT_RAMP.as_bytes()[0] as char;

/// Maps a luminance sample to a glyph of `ramp`.
///
/// The sample is clamped to `0..=255` first, so out-of-range input from an
/// untrusted caller is accepted. The range is split into `ramp.len() - 1`
/// equal intervals, which puts `0` on the first glyph and `255` on the last.
///
/// A single-glyph ramp always yields that glyph. An empty ramp yields the
/// first glyph of [`DEFAULT_RAMP`].
///
/// # Examples
///
/// ```
/// use libartify::map_sample_to_char;
///
/// let ramp: Vec<char> = " .:#@".chars().collect();
/// assert_eq!(map_sample_to_char(0, &ramp), ' ');
/// assert_eq!(map_sample_to_char(128, &ramp), ':');
/// assert_eq!(map_sample_to_char(255, &ramp), '@');
/// assert_eq!(map_sample_to_char(9999, &ramp), '@');
/// ```
pub fn map_sample_to_char(sample: i64, ramp: &[char]) -> char {
    let Some(&first) = ramp.first() else {
        return FALLBACK_CHAR;
    };

    let last = ramp.len() - 1;
    if last == 0 {
        return first;
    }

    // floor(s / (255 / last)) == floor(s * last / 255), done in integers so
    // 255 always lands on `last`.
    let clamped = sample.clamp(0, 255) as usize;
    let index = (clamped * last / 255).min(last);
    ramp[index]
}

/// An ordered sequence of glyphs used as a lookup table from luminance
/// bucket to character.
///
/// Index 0 represents black, the last index represents white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp(Vec<char>);

impl Ramp {
    /// Creates a ramp from a specification string, one glyph per `char`.
    ///
    /// An empty string is accepted and produces an empty ramp; mapping with it
    /// falls back to the first glyph of [`DEFAULT_RAMP`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use libartify::Ramp;
    /// let ramp = Ramp::new(" .:-+=#@");
    /// assert_eq!(ramp.len(), 8);
    /// assert_eq!(ramp.match_char(255), '@');
    /// ```
    pub fn new(spec: &str) -> Self {
        Self(spec.chars().collect())
    }

    /// Returns the same glyphs in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Finds the glyph for a luminance sample. See [`map_sample_to_char`].
    #[inline]
    pub fn match_char(&self, sample: i64) -> char {
        map_sample_to_char(sample, &self.0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::new(DEFAULT_RAMP)
    }
}
