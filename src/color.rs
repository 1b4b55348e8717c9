//! ANSI-aware byte accumulator used by the line formatter.

/// Escape sequence literals. Kept as a macro so they can feed `concat!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __colorlog_esc {
    (off) => {
        "\x1b[0m"
    };
    (red) => {
        "\x1b[31m"
    };
    (green) => {
        "\x1b[32m"
    };
    (orange) => {
        "\x1b[33m"
    };
    (blue) => {
        "\x1b[34m"
    };
    (purple) => {
        "\x1b[35m"
    };
    (cyan) => {
        "\x1b[36m"
    };
    (gray) => {
        "\x1b[37m"
    };
}

/// Wraps a string literal in a color and a trailing reset, at compile time.
#[doc(hidden)]
#[macro_export]
macro_rules! __colorlog_paint {
    ($color:ident, $s:literal) => {
        concat!($crate::__colorlog_esc!($color), $s, $crate::__colorlog_esc!(off))
    };
}

/// Colors available to [`ColorBuffer::paint`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    /// Red
    Red,
    /// Green
    Green,
    /// Orange (ANSI yellow)
    Orange,
    /// Blue
    Blue,
    /// Purple (ANSI magenta)
    Purple,
    /// Cyan
    Cyan,
    /// Gray (ANSI white)
    Gray,
}

impl Color {
    /// The escape sequence switching the terminal to this color.
    #[must_use]
    pub const fn sequence(self) -> &'static str {
        match self {
            Self::Red => __colorlog_esc!(red),
            Self::Green => __colorlog_esc!(green),
            Self::Orange => __colorlog_esc!(orange),
            Self::Blue => __colorlog_esc!(blue),
            Self::Purple => __colorlog_esc!(purple),
            Self::Cyan => __colorlog_esc!(cyan),
            Self::Gray => __colorlog_esc!(gray),
        }
    }
}

/// Sequence resetting all colors and styles.
pub const OFF: &str = __colorlog_esc!(off);

/// Append-only byte buffer with color helpers.
///
/// The buffer never shrinks: [`ColorBuffer::reset`] clears the contents and
/// keeps the allocation, so a long-lived buffer stops allocating once it has
/// grown to the size of the longest line.
#[derive(Default, Debug, Clone)]
pub struct ColorBuffer {
    buf: Vec<u8>,
}

impl ColorBuffer {
    /// Create an empty buffer
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty buffer with room for `cap` bytes
    #[inline]
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    /// Append raw bytes
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single byte
    #[inline]
    pub fn append_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Append `i` as decimal digits, left-padded with `0` up to `width`
    /// digits. A width of 0 means no padding. The sign of a negative number
    /// does not count towards the width.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append_int(&mut self, i: i64, width: usize) {
        let mut digits = [0u8; 20];
        let mut pos = digits.len();
        let mut n = i.unsigned_abs();
        loop {
            pos -= 1;
            digits[pos] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        if i < 0 {
            self.buf.push(b'-');
        }
        let len = digits.len() - pos;
        for _ in len..width {
            self.buf.push(b'0');
        }
        self.buf.extend_from_slice(&digits[pos..]);
    }

    /// Empty the buffer, keeping its capacity
    #[inline]
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Append the reset sequence
    #[inline]
    pub fn off(&mut self) {
        self.append(OFF.as_bytes());
    }

    /// Append the sequence for `color`
    #[inline]
    pub fn paint(&mut self, color: Color) {
        self.append(color.sequence().as_bytes());
    }

    /// Switch to red
    #[inline]
    pub fn red(&mut self) {
        self.paint(Color::Red);
    }
    /// Switch to green
    #[inline]
    pub fn green(&mut self) {
        self.paint(Color::Green);
    }
    /// Switch to orange
    #[inline]
    pub fn orange(&mut self) {
        self.paint(Color::Orange);
    }
    /// Switch to blue
    #[inline]
    pub fn blue(&mut self) {
        self.paint(Color::Blue);
    }
    /// Switch to purple
    #[inline]
    pub fn purple(&mut self) {
        self.paint(Color::Purple);
    }
    /// Switch to cyan
    #[inline]
    pub fn cyan(&mut self) {
        self.paint(Color::Cyan);
    }
    /// Switch to gray
    #[inline]
    pub fn gray(&mut self) {
        self.paint(Color::Gray);
    }

    /// Current contents
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes currently held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// `true` when nothing has been appended since the last reset
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Allocated capacity in bytes
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}
