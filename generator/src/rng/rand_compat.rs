//! `rand_core` integration
//!
//! Lets the generator drive anything in the `rand` ecosystem. Values are
//! routed through the adapter layer so the int-half cache is shared with
//! direct callers.

use rand_core::{Error, RngCore};

use super::bits::BitsStreamGenerator64;
use super::xorshift::XorShift1024Star;

impl RngCore for XorShift1024Star {
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.next_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.next_bytes(dest);
        Ok(())
    }
}
