use tracing::trace;

use crate::smiles::error::SmilesError;

/// Highest ring-closure number SMILES can write (`%99`).
pub const MAX_RING_NUMBER: usize = 99;

/// Hands out ring-closure numbers while a string is being written.
pub trait RingNumbering {
    /// A number that is not currently open.
    fn next(&mut self) -> Result<usize, SmilesError>;
    /// Mark `rnum` as open.
    fn mark_used(&mut self, rnum: usize);
    /// Mark `rnum` as closed.
    fn free(&mut self, rnum: usize);
    /// Forget every number, e.g. between components.
    fn reset(&mut self);
}

/// Always the lowest free number, so closed numbers are reused at once.
#[derive(Debug, Clone)]
pub struct ReuseRingNumbering {
    used: [bool; MAX_RING_NUMBER + 1],
}

impl Default for ReuseRingNumbering {
    fn default() -> Self {
        Self {
            used: [false; MAX_RING_NUMBER + 1],
        }
    }
}

impl RingNumbering for ReuseRingNumbering {
    fn next(&mut self) -> Result<usize, SmilesError> {
        (1..=MAX_RING_NUMBER)
            .find(|&r| !self.used[r])
            .ok_or(SmilesError::RingNumbersExhausted {
                max: MAX_RING_NUMBER,
            })
    }

    fn mark_used(&mut self, rnum: usize) {
        trace!(rnum, "ring number opened");
        self.used[rnum] = true;
    }

    fn free(&mut self, rnum: usize) {
        trace!(rnum, "ring number closed");
        self.used[rnum] = false;
    }

    fn reset(&mut self) {
        self.used = [false; MAX_RING_NUMBER + 1];
    }
}

/// Counts upwards, wrapping after 99, and skips numbers still open. Closed
/// numbers are only reused once the counter comes round again.
#[derive(Debug, Clone)]
pub struct IterativeRingNumbering {
    used: [bool; MAX_RING_NUMBER + 1],
    last: usize,
}

impl Default for IterativeRingNumbering {
    fn default() -> Self {
        Self {
            used: [false; MAX_RING_NUMBER + 1],
            last: 0,
        }
    }
}

impl RingNumbering for IterativeRingNumbering {
    fn next(&mut self) -> Result<usize, SmilesError> {
        for step in 1..=MAX_RING_NUMBER {
            let r = (self.last + step - 1) % MAX_RING_NUMBER + 1;
            if !self.used[r] {
                return Ok(r);
            }
        }
        Err(SmilesError::RingNumbersExhausted {
            max: MAX_RING_NUMBER,
        })
    }

    fn mark_used(&mut self, rnum: usize) {
        trace!(rnum, "ring number opened");
        self.used[rnum] = true;
        self.last = rnum;
    }

    fn free(&mut self, rnum: usize) {
        trace!(rnum, "ring number closed");
        self.used[rnum] = false;
    }

    fn reset(&mut self) {
        self.used = [false; MAX_RING_NUMBER + 1];
        self.last = 0;
    }
}

/// Ring number as written: `1`..`9`, then `%10`..`%99`.
pub fn write_ring_number(rnum: usize, out: &mut String) {
    if rnum < 10 {
        out.push(char::from(b'0' + rnum as u8));
    } else {
        out.push('%');
        out.push(char::from(b'0' + (rnum / 10) as u8));
        out.push(char::from(b'0' + (rnum % 10) as u8));
    }
}
