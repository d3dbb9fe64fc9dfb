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
use super::{Hc2hcOptions, Hc2hcPlan, Hc2hcVariant, hc2hc_applicable};
use crate::HcSample;
use crate::codelet::{CodeletLayout, CodeletQuery, HcCodelet};
use crate::mirrored::{HcWindow, MirroredAxis, copy_mirrored};
use crate::ops::OpCount;
use crate::planner::{PlannerFlags, Score};
use crate::problem::RdftProblem;
use num_complex::Complex;
use num_integer::Integer;

/// Decimation in time with the columns staged through a scratch buffer.
///
/// The kernel always sees `batch_size` columns (or the final remainder) laid
/// out with unit stride between the inputs of a column and `r` between
/// columns, whatever the strides of the output array are.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct DitBuffered {
    batch_size: usize,
}

impl DitBuffered {
    pub(crate) fn new(options: Hc2hcOptions) -> Self {
        DitBuffered {
            batch_size: options.batch_size(),
        }
    }

    /// Copies `batch` columns starting at (`re`, `im`) into `scratch`, runs
    /// the kernel there and copies them back. Returns the twiddles the next
    /// batch starts from.
    #[allow(clippy::too_many_arguments)]
    fn butterfly_batch<'w, T: HcSample>(
        &self,
        plan: &Hc2hcPlan<T, Self>,
        data: &mut [T],
        re: usize,
        im: usize,
        batch: usize,
        twiddles: &'w [Complex<T>],
        scratch: &mut [T],
    ) -> &'w [Complex<T>] {
        let r = plan.r;
        let buf_im = 2 * batch * r - 1;
        let rows = MirroredAxis::new(plan.iios as isize);
        let columns = MirroredAxis::new(plan.os as isize);
        let buf_columns = MirroredAxis::new(r as isize);

        copy_mirrored(
            r,
            batch,
            data,
            re,
            im,
            rows,
            columns,
            scratch,
            0,
            buf_im,
            plan.vs,
            buf_columns,
        );
        let rest = plan.codelet.execute(
            HcWindow::new(scratch, 0, buf_im),
            twiddles,
            CodeletLayout {
                ios: plan.vs,
                dist: buf_columns,
                width: 2 * batch + 1,
            },
        );
        copy_mirrored(
            r,
            batch,
            scratch,
            0,
            buf_im,
            plan.vs,
            buf_columns,
            data,
            re,
            im,
            rows,
            columns,
        );
        rest
    }
}

/// Kernel call layout of `columns` staged columns of radix `radix`.
fn scratch_query(radix: usize, columns: usize) -> CodeletQuery {
    CodeletQuery {
        im_offset: (2 * columns * radix) as isize - 1,
        ios: 1,
        vs: 0,
        width: 2 * columns + 1,
        dist: radix as isize,
    }
}

impl<T: HcSample> Hc2hcVariant<T> for DitBuffered {
    fn name(&self) -> &'static str {
        "rdft-ditbuf"
    }

    fn applicable(&self, codelet: &dyn HcCodelet<T>, problem: &RdftProblem) -> bool {
        if !hc2hc_applicable(codelet, problem) {
            return false;
        }
        let r = codelet.radix();
        let m = problem.sz[0].n / r;
        if m < self.batch_size {
            return true;
        }
        // A zero remainder is still queried, as a call of width 1.
        let (_, remainder) = ((m - 1) / 2).div_rem(&self.batch_size);
        codelet.okp(&scratch_query(r, self.batch_size))
            && codelet.okp(&scratch_query(r, remainder))
    }

    fn score(
        &self,
        codelet: &dyn HcCodelet<T>,
        problem: &RdftProblem,
        flags: PlannerFlags,
    ) -> Score {
        if !Hc2hcVariant::<T>::applicable(self, codelet, problem) {
            return Score::Reject;
        }
        if problem.vector_rank() > 0 && flags.no_vector_recursion {
            return Score::Reject;
        }
        let n = problem.sz[0].n;
        if n <= 512 || n / codelet.radix() <= 4 {
            return Score::Discouraged;
        }
        Score::Preferred
    }

    fn finish(plan: &mut Hc2hcPlan<T, Self>) {
        plan.iios = plan.m * plan.os;
        plan.vs = MirroredAxis::new(1);
        // four loads or stores per staged value
        let staged = OpCount::other(4 * plan.r * plan.columns() * plan.vl);
        plan.ops = plan.children_ops() + staged + plan.codelet_ops();
    }

    fn scratch_length(&self, plan: &Hc2hcPlan<T, Self>) -> usize {
        plan.r * self.batch_size * 2
    }

    fn apply_columns(&self, plan: &Hc2hcPlan<T, Self>, instance: &mut [T], scratch: &mut [T]) {
        let os = plan.os;
        let mut re = os;
        let mut im = (plan.r * plan.m - 1) * os;
        let mut twiddles = plan.twiddles.as_slice();
        let mut j = plan.columns();
        while j >= self.batch_size {
            twiddles = self.butterfly_batch(
                plan,
                instance,
                re,
                im,
                self.batch_size,
                twiddles,
                scratch,
            );
            re += os * self.batch_size;
            im -= os * self.batch_size;
            j -= self.batch_size;
        }
        if j > 0 {
            self.butterfly_batch(plan, instance, re, im, j, twiddles, scratch);
        }
    }
}
