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
use num_complex::Complex;
use num_traits::Float;

/// Stride of one logical axis of half-complex data.
///
/// Real parts advance by `stride` while the matching imaginary parts, stored
/// mirrored at the end of the spectrum, advance by `-stride`. Every sign flip
/// of the packed layout goes through this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MirroredAxis {
    stride: isize,
}

impl MirroredAxis {
    pub const fn new(stride: isize) -> Self {
        MirroredAxis { stride }
    }

    pub const fn re(self) -> isize {
        self.stride
    }

    pub const fn im(self) -> isize {
        -self.stride
    }

    /// Index of the `i`-th real value starting from `base`.
    #[inline(always)]
    pub fn re_at(self, base: usize, i: usize) -> usize {
        base.wrapping_add_signed(self.stride * i as isize)
    }

    /// Index of the `i`-th imaginary value starting from `base`.
    #[inline(always)]
    pub fn im_at(self, base: usize, i: usize) -> usize {
        base.wrapping_add_signed(-self.stride * i as isize)
    }
}

/// Mutable view over half-complex data: real parts walked forward from `re`,
/// imaginary parts walked backward from `im`.
pub struct HcWindow<'a, T> {
    data: &'a mut [T],
    re: usize,
    im: usize,
}

impl<'a, T> HcWindow<'a, T> {
    pub fn new(data: &'a mut [T], re: usize, im: usize) -> Self {
        HcWindow { data, re, im }
    }

    /// Data, index of the first real value and index of the first imaginary value.
    pub fn into_parts(self) -> (&'a mut [T], usize, usize) {
        (self.data, self.re, self.im)
    }
}

/// Copies an `n0 x n1` grid of (real, imaginary) pairs.
///
/// Element `(i0, i1)` of the source has its real part at
/// `src_re + i0 * sa0 + i1 * sa1` and its imaginary part at
/// `src_im - i0 * sa0 - i1 * sa1`; the destination follows the same rule with
/// `sb0` and `sb1`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn copy_mirrored<T: Copy>(
    n0: usize,
    n1: usize,
    src: &[T],
    src_re: usize,
    src_im: usize,
    sa0: MirroredAxis,
    sa1: MirroredAxis,
    dst: &mut [T],
    dst_re: usize,
    dst_im: usize,
    sb0: MirroredAxis,
    sb1: MirroredAxis,
) {
    for i0 in 0..n0 {
        let pra = sa0.re_at(src_re, i0);
        let pia = sa0.im_at(src_im, i0);
        let prb = sb0.re_at(dst_re, i0);
        let pib = sb0.im_at(dst_im, i0);
        for i1 in 0..n1 {
            let xr = src[sa1.re_at(pra, i1)];
            let xi = src[sa1.im_at(pia, i1)];
            dst[sb1.re_at(prb, i1)] = xr;
            dst[sb1.im_at(pib, i1)] = xi;
        }
    }
}

/// Expands a contiguous half-complex array of length `n` into its
/// `n / 2 + 1` non-redundant bins.
pub fn unpack_halfcomplex<T: Float>(hc: &[T], output: &mut [Complex<T>]) {
    let n = hc.len();
    for (k, dst) in output.iter_mut().enumerate().take(n / 2 + 1) {
        let im = if k == 0 || 2 * k == n {
            T::zero()
        } else {
            hc[n - k]
        };
        *dst = Complex::new(hc[k], im);
    }
}
