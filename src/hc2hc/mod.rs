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
mod dit;
mod ditbuf;

use crate::codelet::HcCodelet;
use crate::err::try_vec;
use crate::mirrored::MirroredAxis;
use crate::ops::OpCount;
use crate::planner::{NopPlan, Planner, PlannerFlags, RdftPlan, Score, Solver};
use crate::problem::{IoDim, RdftKind, RdftProblem};
use crate::util::hc2hc_twiddles;
use crate::{HcSample, HcftError};
use log::trace;
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

use dit::Dit;
use ditbuf::DitBuffered;

type SharedPlan<T> = Arc<dyn RdftPlan<T> + Send + Sync>;
type SharedCodelet<T> = Arc<dyn HcCodelet<T> + Send + Sync>;

/// Tuning knobs of the half-complex radix step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Hc2hcOptions {
    batch_size: usize,
}

impl Hc2hcOptions {
    /// `batch_size` is the number of columns staged through the scratch
    /// buffer per kernel call of the buffered variant.
    pub fn new(batch_size: usize) -> Result<Self, HcftError> {
        if batch_size == 0 {
            return Err(HcftError::InvalidBatchSize(batch_size));
        }
        Ok(Hc2hcOptions { batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Default for Hc2hcOptions {
    fn default() -> Self {
        Hc2hcOptions { batch_size: 4 }
    }
}

/// Conditions every half-complex radix step shares, whatever kernel layout
/// it ends up using.
pub(crate) fn hc2hc_applicable<T>(codelet: &dyn HcCodelet<T>, problem: &RdftProblem) -> bool {
    let r = codelet.radix();
    problem.rank() == 1
        && problem.vector_rank() <= 1
        && problem.kind == RdftKind::R2hc
        && !problem.is_empty()
        && r >= 2
        && problem.sz[0].n.is_multiple_of(r)
}

/// One strategy for the column butterflies of a radix step. Child plans and
/// the twiddle table are shared by all of them.
pub(crate) trait Hc2hcVariant<T>: Sized + Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn applicable(&self, codelet: &dyn HcCodelet<T>, problem: &RdftProblem) -> bool;

    fn score(
        &self,
        codelet: &dyn HcCodelet<T>,
        problem: &RdftProblem,
        flags: PlannerFlags,
    ) -> Score;

    /// Fixes the derived strides and the cost of a freshly assembled plan.
    fn finish(plan: &mut Hc2hcPlan<T, Self>);

    /// Scratch elements `apply_columns` needs.
    fn scratch_length(&self, plan: &Hc2hcPlan<T, Self>) -> usize;

    /// Runs the kernel over columns `1..=(m-1)/2` of one transform whose
    /// output starts at `instance[0]`.
    fn apply_columns(&self, plan: &Hc2hcPlan<T, Self>, instance: &mut [T], scratch: &mut [T]);
}

/// Child plans of a decimation in time step.
pub(crate) struct DitChildren<T> {
    /// `r` interleaved transforms of size `m`, over every vector instance.
    pub(crate) cld: SharedPlan<T>,
    /// Column 0 of one instance, in place.
    pub(crate) cld0: SharedPlan<T>,
    /// Column `m/2` of one instance, in place. Nop when `m` is odd.
    pub(crate) cldm: SharedPlan<T>,
}

/// Child problems of a decimation in time step of radix `r`.
pub(crate) fn dit_child_problems(
    problem: &RdftProblem,
    r: usize,
) -> (RdftProblem, RdftProblem, Option<RdftProblem>) {
    let d = problem.sz[0];
    let m = d.n / r;
    let column = IoDim::new(r, m * d.os, m * d.os);

    let mut vecsz = problem.vecsz.clone();
    vecsz.push(IoDim::new(r, d.is, m * d.os));
    let cld = RdftProblem::new(vec![IoDim::new(m, r * d.is, d.os)], vecsz, RdftKind::R2hc);
    let cld0 = RdftProblem::new(vec![column], Vec::new(), RdftKind::R2hc);
    let cldm = m
        .is_multiple_of(2)
        .then(|| RdftProblem::new(vec![column], Vec::new(), RdftKind::R2hcShifted));
    (cld, cld0, cldm)
}

impl<T: HcSample> DitChildren<T> {
    fn plan(
        problem: &RdftProblem,
        r: usize,
        planner: &Planner<T>,
    ) -> Result<Option<Self>, HcftError> {
        let (cld, cld0, cldm) = dit_child_problems(problem, r);
        let Some(cld) = planner.plan_child(&cld)? else {
            return Ok(None);
        };
        let Some(cld0) = planner.plan_child(&cld0)? else {
            return Ok(None);
        };
        let cldm: SharedPlan<T> = match cldm {
            Some(cldm) => match planner.plan_child(&cldm)? {
                Some(plan) => plan,
                None => return Ok(None),
            },
            None => Arc::new(NopPlan::new()),
        };
        Ok(Some(DitChildren { cld, cld0, cldm }))
    }
}

/// Half-complex Cooley-Tukey step of size `n = r * m`.
pub(crate) struct Hc2hcPlan<T, V> {
    pub(crate) children: DitChildren<T>,
    pub(crate) codelet: SharedCodelet<T>,
    pub(crate) twiddles: Vec<Complex<T>>,
    pub(crate) r: usize,
    pub(crate) m: usize,
    pub(crate) vl: usize,
    pub(crate) os: usize,
    pub(crate) ovs: usize,
    /// Distance between the `r` inputs of one column in the output array.
    pub(crate) iios: usize,
    /// Distance between the `r` inputs of one column as the kernel sees them.
    pub(crate) vs: MirroredAxis,
    pub(crate) ops: OpCount,
    extent_in: usize,
    extent_out: usize,
    in_place: bool,
    pub(crate) variant: V,
}

impl<T: HcSample, V: Hc2hcVariant<T>> Hc2hcPlan<T, V> {
    /// Puts a plan together and finishes it. The problem must satisfy
    /// [hc2hc_applicable] for `codelet`.
    pub(crate) fn assemble(
        problem: &RdftProblem,
        codelet: SharedCodelet<T>,
        children: DitChildren<T>,
        twiddles: Vec<Complex<T>>,
        variant: V,
    ) -> Self {
        let d = problem.sz[0];
        let r = codelet.radix();
        let (vl, _, ovs) = problem.vector_rank1().unwrap_or((1, 0, 0));
        let mut plan = Hc2hcPlan {
            children,
            codelet,
            twiddles,
            r,
            m: d.n / r,
            vl,
            os: d.os,
            ovs,
            iios: 0,
            vs: MirroredAxis::new(0),
            ops: OpCount::zero(),
            extent_in: problem.extent_in(),
            extent_out: problem.extent_out(),
            in_place: problem.in_place_compatible(),
            variant,
        };
        V::finish(&mut plan);
        trace!(
            "{} r={} m={} vl={} os={} ovs={} iios={} vs={}",
            plan.variant.name(),
            plan.r,
            plan.m,
            plan.vl,
            plan.os,
            plan.ovs,
            plan.iios,
            plan.vs.re()
        );
        plan
    }

    /// Kernel columns of one instance.
    pub(crate) fn columns(&self) -> usize {
        (self.m - 1) / 2
    }

    /// Children cost shared by every variant.
    pub(crate) fn children_ops(&self) -> OpCount {
        self.children.cld.ops()
            + (self.children.cld0.ops() + self.children.cldm.ops()).times(self.vl)
    }

    /// Kernel cost over every column of every instance.
    pub(crate) fn codelet_ops(&self) -> OpCount {
        let calls = self.vl * self.columns() / self.codelet.vector_width();
        self.codelet.ops().times(calls)
    }
}

impl<T: HcSample, V: Hc2hcVariant<T>> RdftPlan<T> for Hc2hcPlan<T, V> {
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
        // The first stage reads with stride r * is, so it cannot overwrite its own input.
        let mut input = try_vec![T::zero(); self.extent_in];
        input.copy_from_slice(&in_place[..self.extent_in]);
        self.execute_out_of_place(&input, in_place)
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

        self.children.cld.execute_out_of_place(input, output)?;

        let mut scratch = try_vec![T::zero(); self.variant.scratch_length(self)];
        let middle = self.os * (self.m / 2);
        for i in 0..self.vl {
            let instance = &mut output[i * self.ovs..];
            self.children.cld0.execute(instance)?;
            self.variant.apply_columns(self, instance, &mut scratch);
            self.children.cldm.execute(&mut instance[middle..])?;
        }
        Ok(())
    }

    fn ops(&self) -> OpCount {
        self.ops
    }
}

struct Hc2hcSolver<T, V> {
    codelet: SharedCodelet<T>,
    variant: V,
}

impl<T: HcSample, V: Hc2hcVariant<T> + Clone> Solver<T> for Hc2hcSolver<T, V>
where
    f64: AsPrimitive<T>,
{
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn applicable(&self, problem: &RdftProblem) -> bool {
        self.variant.applicable(self.codelet.as_ref(), problem)
    }

    fn score(&self, problem: &RdftProblem, flags: PlannerFlags) -> Score {
        self.variant.score(self.codelet.as_ref(), problem, flags)
    }

    fn make_plan(
        &self,
        problem: &RdftProblem,
        planner: &Planner<T>,
    ) -> Result<Option<SharedPlan<T>>, HcftError> {
        if !self.applicable(problem) {
            return Ok(None);
        }
        let r = self.codelet.radix();
        let Some(children) = DitChildren::plan(problem, r, planner)? else {
            trace!(
                "{} could not plan children for size {}",
                self.variant.name(),
                problem.length()
            );
            return Ok(None);
        };
        let twiddles = hc2hc_twiddles(r, problem.length() / r)?;
        Ok(Some(Arc::new(Hc2hcPlan::assemble(
            problem,
            self.codelet.clone(),
            children,
            twiddles,
            self.variant.clone(),
        ))))
    }
}

/// Buffered decimation in time solver for `codelet`: columns are staged
/// `options.batch_size()` at a time through a small contiguous buffer.
pub fn make_ditbuf_solver<T: HcSample>(
    codelet: Arc<dyn HcCodelet<T> + Send + Sync>,
    options: Hc2hcOptions,
) -> Arc<dyn Solver<T> + Send + Sync>
where
    f64: AsPrimitive<T>,
{
    Arc::new(Hc2hcSolver {
        codelet,
        variant: DitBuffered::new(options),
    })
}

/// Decimation in time solver running `codelet` directly on the output array.
pub fn make_dit_solver<T: HcSample>(
    codelet: Arc<dyn HcCodelet<T> + Send + Sync>,
) -> Arc<dyn Solver<T> + Send + Sync>
where
    f64: AsPrimitive<T>,
{
    Arc::new(Hc2hcSolver {
        codelet,
        variant: Dit,
    })
}
