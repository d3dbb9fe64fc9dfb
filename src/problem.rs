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
/// One dimension of a strided transform: `n` elements read with stride `is`
/// and written with stride `os`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IoDim {
    pub n: usize,
    pub is: usize,
    pub os: usize,
}

impl IoDim {
    pub const fn new(n: usize, is: usize, os: usize) -> Self {
        IoDim { n, is, os }
    }

    /// Contiguous, unit stride dimension.
    pub const fn contiguous(n: usize) -> Self {
        IoDim { n, is: 1, os: 1 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RdftKind {
    /// Real input to half-complex output:
    /// `o[k] = Re X[k]` for `k <= n/2` and `o[n-k] = Im X[k]` for `0 < k < n/2`.
    R2hc,
    /// Real input to half-complex output of a DFT shifted by half a sample in
    /// frequency, `Z[j] = sum x[i] * exp(-2*pi*i*i(j+1/2)/n)`:
    /// `o[j] = Re Z[j]` for `j < (n+1)/2` and `o[n-1-j] = Im Z[j]` for `j < n/2`.
    R2hcShifted,
}

/// A rank-1 (or rank-0) real DFT over `sz`, repeated over every index of the
/// vector dimensions `vecsz`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdftProblem {
    pub sz: Vec<IoDim>,
    pub vecsz: Vec<IoDim>,
    pub kind: RdftKind,
}

impl RdftProblem {
    pub fn new(sz: Vec<IoDim>, vecsz: Vec<IoDim>, kind: RdftKind) -> Self {
        RdftProblem { sz, vecsz, kind }
    }

    /// Single contiguous forward real transform of size `n`.
    pub fn r2hc(n: usize) -> Self {
        RdftProblem {
            sz: vec![IoDim::contiguous(n)],
            vecsz: Vec::new(),
            kind: RdftKind::R2hc,
        }
    }

    /// `howmany` contiguous transforms of size `n` stored one after another.
    pub fn r2hc_batched(n: usize, howmany: usize) -> Self {
        RdftProblem {
            sz: vec![IoDim::contiguous(n)],
            vecsz: vec![IoDim::new(howmany, n, n)],
            kind: RdftKind::R2hc,
        }
    }

    pub fn rank(&self) -> usize {
        self.sz.len()
    }

    pub fn vector_rank(&self) -> usize {
        self.vecsz.len()
    }

    /// Transform length, 1 for rank 0 problems.
    pub fn length(&self) -> usize {
        self.sz.iter().map(|d| d.n).product()
    }

    /// Number of independent transforms.
    pub fn howmany(&self) -> usize {
        self.vecsz.iter().map(|d| d.n).product()
    }

    pub fn is_empty(&self) -> bool {
        self.sz.iter().chain(self.vecsz.iter()).any(|d| d.n == 0)
    }

    /// Collapses a vector of rank <= 1 into `(vl, ivs, ovs)`.
    pub fn vector_rank1(&self) -> Option<(usize, usize, usize)> {
        match self.vecsz.as_slice() {
            [] => Some((1, 0, 0)),
            [d] => Some((d.n, d.is, d.os)),
            _ => None,
        }
    }

    /// Minimum input slice length touched by this problem.
    pub fn extent_in(&self) -> usize {
        extent(self.sz.iter().chain(self.vecsz.iter()).map(|d| (d.n, d.is)))
    }

    /// Minimum output slice length touched by this problem.
    pub fn extent_out(&self) -> usize {
        extent(self.sz.iter().chain(self.vecsz.iter()).map(|d| (d.n, d.os)))
    }

    /// Whether executing in place reads and writes the same locations.
    pub fn in_place_compatible(&self) -> bool {
        self.sz.iter().chain(self.vecsz.iter()).all(|d| d.is == d.os)
    }
}

fn extent(dims: impl Iterator<Item = (usize, usize)>) -> usize {
    let mut last = 0usize;
    for (n, stride) in dims {
        if n == 0 {
            return 0;
        }
        last += (n - 1) * stride;
    }
    last + 1
}
