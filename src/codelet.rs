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
use crate::mirrored::{HcWindow, MirroredAxis};
use crate::ops::OpCount;
use crate::util::compute_twiddle;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Layout a kernel is invoked with.
///
/// `ios` separates the `radix` inputs of one column, `dist` separates
/// consecutive columns. `width` is the cofactor the kernel believes it is
/// working on, it processes `(width - 1) / 2` columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeletLayout {
    pub ios: MirroredAxis,
    pub dist: MirroredAxis,
    pub width: usize,
}

impl CodeletLayout {
    pub fn columns(&self) -> usize {
        self.width.saturating_sub(1) / 2
    }
}

/// Static description of an invocation, used for capability queries before
/// any data exists. Offsets and strides are in elements; `im_offset` is the
/// position of the first imaginary value relative to the first real one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeletQuery {
    pub im_offset: isize,
    pub ios: isize,
    pub vs: isize,
    pub width: usize,
    pub dist: isize,
}

impl CodeletQuery {
    pub fn columns(&self) -> usize {
        self.width.saturating_sub(1) / 2
    }
}

/// Fixed radix twiddle butterfly over half-complex columns.
///
/// For column `c` the real part of input `i` lives at `re + c*dist + i*ios`
/// and its imaginary part at `im - c*dist - (radix-1-i)*ios`. The kernel
/// multiplies input `i > 0` by the next twiddles (`radix - 1` per column),
/// runs a size `radix` DFT and writes the spectrum back over the same
/// locations in half-complex order. Returns the twiddles it did not consume.
pub trait HcCodelet<T>: Send + Sync {
    fn radix(&self) -> usize;

    /// Columns processed together per call unit.
    fn vector_width(&self) -> usize {
        1
    }

    /// Cost of processing `vector_width()` columns.
    fn ops(&self) -> OpCount;

    fn okp(&self, query: &CodeletQuery) -> bool;

    fn execute<'w>(
        &self,
        window: HcWindow<'_, T>,
        twiddles: &'w [Complex<T>],
        layout: CodeletLayout,
    ) -> &'w [Complex<T>];
}

fn column_ops(radix: usize) -> OpCount {
    let r = radix as f64;
    OpCount::new(2. * (r - 1.) + 4. * r * r, 4. * (r - 1.) + 4. * r * r, 0.)
}

#[inline(always)]
fn load_column<T: HcSample, const R: usize>(
    data: &[T],
    re: usize,
    im: usize,
    ios: MirroredAxis,
    twiddles: &[Complex<T>],
) -> [Complex<T>; R] {
    let mut y = [Complex::<T>::zero(); R];
    for (i, dst) in y.iter_mut().enumerate() {
        let v = Complex::new(data[ios.re_at(re, i)], data[ios.im_at(im, R - 1 - i)]);
        *dst = if i == 0 { v } else { v * twiddles[i - 1] };
    }
    y
}

#[inline(always)]
fn store_bin<T: HcSample>(
    data: &mut [T],
    re: usize,
    im: usize,
    ios: MirroredAxis,
    j: usize,
    half: usize,
    value: Complex<T>,
) {
    // Bins past the middle of the full spectrum are stored through their conjugate partner.
    if j < half {
        data[ios.re_at(re, j)] = value.re;
        data[ios.im_at(im, j)] = value.im;
    } else {
        data[ios.im_at(im, j)] = value.re;
        data[ios.re_at(re, j)] = -value.im;
    }
}

/// Scalar kernel for any radix, one column at a time.
pub struct Hc2hcGeneric<T, const R: usize> {
    roots: [Complex<T>; R],
}

impl<T: HcSample, const R: usize> Hc2hcGeneric<T, R>
where
    f64: AsPrimitive<T>,
{
    pub fn new() -> Self {
        assert!(R >= 2, "Radix must be at least 2, but it was {R}");
        Hc2hcGeneric {
            roots: std::array::from_fn(|q| compute_twiddle(q, R)),
        }
    }
}

impl<T: HcSample, const R: usize> Default for Hc2hcGeneric<T, R>
where
    f64: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HcSample, const R: usize> Hc2hcGeneric<T, R> {
    #[inline(always)]
    fn butterfly_column(
        &self,
        data: &mut [T],
        re: usize,
        im: usize,
        ios: MirroredAxis,
        twiddles: &[Complex<T>],
    ) {
        let y = load_column::<T, R>(data, re, im, ios, twiddles);
        let half = R.div_ceil(2);
        for j in 0..R {
            let mut acc = Complex::<T>::zero();
            let mut q = 0usize;
            for &yi in y.iter() {
                acc = acc + yi * self.roots[q];
                q += j;
                if q >= R {
                    q -= R;
                }
            }
            store_bin(data, re, im, ios, j, half, acc);
        }
    }
}

impl<T: HcSample, const R: usize> HcCodelet<T> for Hc2hcGeneric<T, R> {
    fn radix(&self) -> usize {
        R
    }

    fn ops(&self) -> OpCount {
        column_ops(R)
    }

    fn okp(&self, _: &CodeletQuery) -> bool {
        true
    }

    fn execute<'w>(
        &self,
        window: HcWindow<'_, T>,
        twiddles: &'w [Complex<T>],
        layout: CodeletLayout,
    ) -> &'w [Complex<T>] {
        let (data, re, im) = window.into_parts();
        let mut twiddles = twiddles;
        for c in 0..layout.columns() {
            self.butterfly_column(
                data,
                layout.dist.re_at(re, c),
                layout.dist.im_at(im, c),
                layout.ios,
                twiddles,
            );
            twiddles = &twiddles[R - 1..];
        }
        twiddles
    }
}

/// Two-lane kernel: columns are transformed in pairs sharing every root load.
///
/// Only accepts the contiguous scratch layout (unit `ios`, `dist == R`) with
/// an even number of columns.
pub struct Hc2hcPaired<T, const R: usize> {
    single: Hc2hcGeneric<T, R>,
}

impl<T: HcSample, const R: usize> Hc2hcPaired<T, R>
where
    f64: AsPrimitive<T>,
{
    pub fn new() -> Self {
        Hc2hcPaired {
            single: Hc2hcGeneric::new(),
        }
    }
}

impl<T: HcSample, const R: usize> Default for Hc2hcPaired<T, R>
where
    f64: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HcSample, const R: usize> HcCodelet<T> for Hc2hcPaired<T, R> {
    fn radix(&self) -> usize {
        R
    }

    fn vector_width(&self) -> usize {
        2
    }

    fn ops(&self) -> OpCount {
        column_ops(R).times(2)
    }

    fn okp(&self, query: &CodeletQuery) -> bool {
        let columns = query.columns();
        query.ios == 1
            && query.dist == R as isize
            && query.im_offset == (2 * columns * R) as isize - 1
            && columns.is_multiple_of(2)
    }

    fn execute<'w>(
        &self,
        window: HcWindow<'_, T>,
        twiddles: &'w [Complex<T>],
        layout: CodeletLayout,
    ) -> &'w [Complex<T>] {
        let (data, re, im) = window.into_parts();
        let ios = layout.ios;
        let half = R.div_ceil(2);
        let columns = layout.columns();
        let mut twiddles = twiddles;
        let mut c = 0usize;
        while c + 2 <= columns {
            let (re0, im0) = (layout.dist.re_at(re, c), layout.dist.im_at(im, c));
            let (re1, im1) = (layout.dist.re_at(re, c + 1), layout.dist.im_at(im, c + 1));
            let y0 = load_column::<T, R>(data, re0, im0, ios, twiddles);
            let y1 = load_column::<T, R>(data, re1, im1, ios, &twiddles[R - 1..]);
            for j in 0..R {
                let mut acc0 = Complex::<T>::zero();
                let mut acc1 = Complex::<T>::zero();
                let mut q = 0usize;
                for (&a, &b) in y0.iter().zip(y1.iter()) {
                    let w = self.single.roots[q];
                    acc0 = acc0 + a * w;
                    acc1 = acc1 + b * w;
                    q += j;
                    if q >= R {
                        q -= R;
                    }
                }
                store_bin(data, re0, im0, ios, j, half, acc0);
                store_bin(data, re1, im1, ios, j, half, acc1);
            }
            twiddles = &twiddles[2 * (R - 1)..];
            c += 2;
        }
        if c < columns {
            self.single.butterfly_column(
                data,
                layout.dist.re_at(re, c),
                layout.dist.im_at(im, c),
                ios,
                twiddles,
            );
            twiddles = &twiddles[R - 1..];
        }
        twiddles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Direct evaluation of one half-complex column step for `radix` inputs.
    fn reference_column(
        radix: usize,
        n: usize,
        k: usize,
        inputs: &[Complex<f64>],
    ) -> Vec<Complex<f64>> {
        (0..radix)
            .map(|j| {
                inputs
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| y * compute_twiddle::<f64>(i * (k + j * n / radix), n))
                    .fold(Complex::zero(), |acc, x| acc + x)
            })
            .collect()
    }

    fn check_codelet<const R: usize>(codelet: &dyn HcCodelet<f64>, columns: usize) {
        let m = 2 * columns + 1;
        let n = R * m;
        // contiguous scratch layout: rows stride 1, columns stride R
        let mut data = vec![0f64; 2 * columns * R];
        for z in data.iter_mut() {
            *z = rand::rng().random();
        }
        let src = data.clone();
        let im = data.len().saturating_sub(1);
        let twiddles = crate::util::hc2hc_twiddles::<f64>(R, m).unwrap();
        let layout = CodeletLayout {
            ios: MirroredAxis::new(1),
            dist: MirroredAxis::new(R as isize),
            width: m,
        };
        let rest = codelet.execute(HcWindow::new(&mut data, 0, im), &twiddles, layout);
        assert!(rest.is_empty());

        for c in 0..columns {
            let inputs = (0..R)
                .map(|i| Complex::new(src[c * R + i], src[im - c * R - (R - 1 - i)]))
                .collect::<Vec<_>>();
            let expected = reference_column(R, n, c + 1, &inputs);
            for (j, e) in expected.iter().enumerate() {
                let (re, im_part) = if j < R.div_ceil(2) {
                    (data[c * R + j], data[im - c * R - j])
                } else {
                    (data[im - c * R - j], -data[c * R + j])
                };
                assert!(
                    (re - e.re).abs() < 1e-10,
                    "re {} != {} for column {c} bin {j}",
                    re,
                    e.re
                );
                assert!(
                    (im_part - e.im).abs() < 1e-10,
                    "im {} != {} for column {c} bin {j}",
                    im_part,
                    e.im
                );
            }
        }
    }

    #[test]
    fn test_generic_codelets() {
        for columns in 0..7 {
            check_codelet::<2>(&Hc2hcGeneric::<f64, 2>::new(), columns);
            check_codelet::<3>(&Hc2hcGeneric::<f64, 3>::new(), columns);
            check_codelet::<4>(&Hc2hcGeneric::<f64, 4>::new(), columns);
            check_codelet::<5>(&Hc2hcGeneric::<f64, 5>::new(), columns);
            check_codelet::<8>(&Hc2hcGeneric::<f64, 8>::new(), columns);
        }
    }

    #[test]
    fn test_paired_codelets() {
        for columns in 0..7 {
            check_codelet::<2>(&Hc2hcPaired::<f64, 2>::new(), columns);
            check_codelet::<3>(&Hc2hcPaired::<f64, 3>::new(), columns);
            check_codelet::<4>(&Hc2hcPaired::<f64, 4>::new(), columns);
        }
    }

    #[test]
    fn test_paired_capabilities() {
        let codelet = Hc2hcPaired::<f32, 4>::new();
        let query = |columns: usize| CodeletQuery {
            im_offset: (2 * columns * 4) as isize - 1,
            ios: 1,
            vs: 0,
            width: 2 * columns + 1,
            dist: 4,
        };
        assert!(codelet.okp(&query(4)));
        assert!(codelet.okp(&query(2)));
        assert!(codelet.okp(&query(0)));
        assert!(!codelet.okp(&query(3)));
        assert!(!codelet.okp(&query(1)));
        let strided = CodeletQuery {
            ios: 9,
            ..query(4)
        };
        assert!(!codelet.okp(&strided));
        assert!(Hc2hcGeneric::<f32, 4>::new().okp(&strided));
        assert_eq!(codelet.vector_width(), 2);
        assert_eq!(codelet.ops(), Hc2hcGeneric::<f32, 4>::new().ops().times(2));
    }
}
