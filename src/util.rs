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
use crate::HcSample;
use crate::err::{HcftError, try_vec};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// `exp(-2*pi*i * index / fft_len)`, evaluated in double precision.
pub(crate) fn compute_twiddle<T: HcSample>(index: usize, fft_len: usize) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let reduced = index % fft_len;
    let angle = -2. * std::f64::consts::PI * reduced as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();
    Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    }
}

/// Twiddles of one half-complex radix step of size `radix * m`.
///
/// For every column `k` in `1..=(m-1)/2` the table holds `W_n^(i*k)` for
/// `i` in `1..radix`, so kernels consume `radix - 1` entries per column.
pub(crate) fn hc2hc_twiddles<T: HcSample>(
    radix: usize,
    m: usize,
) -> Result<Vec<Complex<T>>, HcftError>
where
    f64: AsPrimitive<T>,
{
    let n = radix * m;
    let columns = m.saturating_sub(1) / 2;
    let per_column = radix.saturating_sub(1);
    let mut twiddles = try_vec![Complex::<T>::default(); columns * per_column];
    for (k, row) in twiddles.chunks_exact_mut(per_column.max(1)).enumerate() {
        for (i, dst) in row.iter_mut().enumerate() {
            *dst = compute_twiddle((k + 1) * (i + 1), n);
        }
    }
    Ok(twiddles)
}
