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
use crate::err::try_vec;
use crate::ops::OpCount;
use crate::planner::{Planner, PlannerFlags, RdftPlan, Score, Solver};
use crate::problem::{IoDim, RdftKind, RdftProblem};
use crate::util::compute_twiddle;
use crate::{HcSample, HcftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::marker::PhantomData;
use std::sync::Arc;

/// Quadratic time evaluation of a rank-1 real transform, repeated over any
/// number of vector dimensions.
pub(crate) struct DirectRdft<T> {
    execution_length: usize,
    is: usize,
    os: usize,
    kind: RdftKind,
    vecsz: Vec<IoDim>,
    roots: Vec<Complex<T>>,
    extent_in: usize,
    extent_out: usize,
    in_place: bool,
    howmany: usize,
}

impl<T: HcSample> DirectRdft<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(problem: &RdftProblem) -> Result<Self, HcftError> {
        assert_eq!(problem.rank(), 1, "Direct transform handles rank 1 only");
        let d = problem.sz[0];
        if problem.is_empty() {
            return Err(HcftError::ZeroSizedTransform);
        }
        let period = match problem.kind {
            RdftKind::R2hc => d.n,
            RdftKind::R2hcShifted => 2 * d.n,
        };
        let mut roots = try_vec![Complex::<T>::zero(); period];
        for (q, dst) in roots.iter_mut().enumerate() {
            *dst = compute_twiddle(q, period);
        }
        Ok(DirectRdft {
            execution_length: d.n,
            is: d.is,
            os: d.os,
            kind: problem.kind,
            vecsz: problem.vecsz.clone(),
            roots,
            extent_in: problem.extent_in(),
            extent_out: problem.extent_out(),
            in_place: problem.in_place_compatible(),
            howmany: problem.howmany(),
        })
    }
}

/// Calls `f(input_offset, output_offset)` for every index of `dims`.
fn for_each_offset(
    dims: &[IoDim],
    ioff: usize,
    ooff: usize,
    f: &mut impl FnMut(usize, usize),
) {
    match dims.split_first() {
        None => f(ioff, ooff),
        Some((d, rest)) => {
            for i in 0..d.n {
                for_each_offset(rest, ioff + i * d.is, ooff + i * d.os, f);
            }
        }
    }
}

impl<T: HcSample> DirectRdft<T> {
    fn bins(&self) -> usize {
        match self.kind {
            RdftKind::R2hc => self.execution_length / 2 + 1,
            RdftKind::R2hcShifted => self.execution_length.div_ceil(2),
        }
    }

    fn transform(&self, x: &[T], out: &mut [T]) {
        let n = self.execution_length;
        let period = self.roots.len();
        for k in 0..self.bins() {
            let step = match self.kind {
                RdftKind::R2hc => k,
                RdftKind::R2hcShifted => 2 * k + 1,
            };
            let mut acc = Complex::<T>::zero();
            let mut q = 0usize;
            for &v in x.iter() {
                let w = self.roots[q];
                acc.re = v.mul_add(w.re, acc.re);
                acc.im = v.mul_add(w.im, acc.im);
                q += step;
                while q >= period {
                    q -= period;
                }
            }
            match self.kind {
                RdftKind::R2hc => {
                    out[k] = acc.re;
                    if k > 0 && k < n - k {
                        out[n - k] = acc.im;
                    }
                }
                RdftKind::R2hcShifted => {
                    out[k] = acc.re;
                    if k < n / 2 {
                        out[n - 1 - k] = acc.im;
                    }
                }
            }
        }
    }
}

impl<T: HcSample> RdftPlan<T> for DirectRdft<T> {
    fn execute(&self, in_place: &mut [T]) -> Result<(), HcftError> {
        if !self.in_place {
            return Err(HcftError::InPlaceStrideMismatch);
        }
        if in_place.len() < self.extent_out {
            return Err(HcftError::OutputBufferTooSmall(
                in_place.len(),
                self.extent_out,
            ));
        }
        let mut x = try_vec![T::zero(); self.execution_length];
        let mut out = try_vec![T::zero(); self.execution_length];
        for_each_offset(&self.vecsz, 0, 0, &mut |_, off| {
            for (t, dst) in x.iter_mut().enumerate() {
                *dst = in_place[off + t * self.is];
            }
            self.transform(&x, &mut out);
            for (t, src) in out.iter().enumerate() {
                in_place[off + t * self.os] = *src;
            }
        });
        Ok(())
    }

    fn execute_out_of_place(&self, input: &[T], output: &mut [T]) -> Result<(), HcftError> {
        if input.len() < self.extent_in {
            return Err(HcftError::InputBufferTooSmall(input.len(), self.extent_in));
        }
        if output.len() < self.extent_out {
            return Err(HcftError::OutputBufferTooSmall(
                output.len(),
                self.extent_out,
            ));
        }
        let mut x = try_vec![T::zero(); self.execution_length];
        let mut out = try_vec![T::zero(); self.execution_length];
        for_each_offset(&self.vecsz, 0, 0, &mut |ioff, ooff| {
            for (t, dst) in x.iter_mut().enumerate() {
                *dst = input[ioff + t * self.is];
            }
            self.transform(&x, &mut out);
            for (t, src) in out.iter().enumerate() {
                output[ooff + t * self.os] = *src;
            }
        });
        Ok(())
    }

    fn ops(&self) -> OpCount {
        let per_bin = self.execution_length * self.bins();
        OpCount::new(0., 0., 2. * per_bin as f64).times(self.howmany)
    }
}

struct DirectSolver<T> {
    phantom_data: PhantomData<T>,
}

impl<T: HcSample> Solver<T> for DirectSolver<T>
where
    f64: AsPrimitive<T>,
{
    fn name(&self) -> &'static str {
        "rdft-direct"
    }

    fn applicable(&self, problem: &RdftProblem) -> bool {
        problem.rank() == 1 && !problem.is_empty()
    }

    fn score(&self, problem: &RdftProblem, _: PlannerFlags) -> Score {
        if !self.applicable(problem) {
            return Score::Reject;
        }
        if problem.length() <= 16 {
            Score::Preferred
        } else {
            Score::Discouraged
        }
    }

    fn make_plan(
        &self,
        problem: &RdftProblem,
        _: &Planner<T>,
    ) -> Result<Option<Arc<dyn RdftPlan<T> + Send + Sync>>, HcftError> {
        if !self.applicable(problem) {
            return Ok(None);
        }
        Ok(Some(Arc::new(DirectRdft::new(problem)?)))
    }
}

/// Solver for any rank-1 problem by direct summation.
pub fn make_direct_solver<T: HcSample>() -> Arc<dyn Solver<T> + Send + Sync>
where
    f64: AsPrimitive<T>,
{
    Arc::new(DirectSolver {
        phantom_data: PhantomData,
    })
}
