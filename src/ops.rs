/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::ops::{Add, AddAssign};

/// Estimated arithmetic cost of executing a plan once.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OpCount {
    pub add: f64,
    pub mul: f64,
    pub fma: f64,
    pub other: f64,
}

impl OpCount {
    pub const fn zero() -> Self {
        OpCount {
            add: 0.,
            mul: 0.,
            fma: 0.,
            other: 0.,
        }
    }

    pub const fn new(add: f64, mul: f64, fma: f64) -> Self {
        OpCount {
            add,
            mul,
            fma,
            other: 0.,
        }
    }

    /// Loads, stores and anything else that isn't floating point arithmetic.
    pub fn other(count: usize) -> Self {
        OpCount {
            other: count as f64,
            ..OpCount::zero()
        }
    }

    /// Cost of running `self` `times` times.
    pub fn times(self, times: usize) -> Self {
        let k = times as f64;
        OpCount {
            add: self.add * k,
            mul: self.mul * k,
            fma: self.fma * k,
            other: self.other * k,
        }
    }

    pub fn total(&self) -> f64 {
        self.add + self.mul + 2. * self.fma + self.other
    }
}

impl Add for OpCount {
    type Output = OpCount;

    fn add(self, rhs: Self) -> Self::Output {
        OpCount {
            add: self.add + rhs.add,
            mul: self.mul + rhs.mul,
            fma: self.fma + rhs.fma,
            other: self.other + rhs.other,
        }
    }
}

impl AddAssign for OpCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops_combination() {
        let a = OpCount::new(2., 3., 1.);
        let b = OpCount::other(5);
        let c = (a + b).times(3);
        assert_eq!(c.add, 6.);
        assert_eq!(c.mul, 9.);
        assert_eq!(c.fma, 3.);
        assert_eq!(c.other, 15.);
        assert_eq!(c.total(), 6. + 9. + 6. + 15.);
        assert_eq!(OpCount::zero().times(100), OpCount::zero());
    }
}
