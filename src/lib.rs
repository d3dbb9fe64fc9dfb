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
#![cfg_attr(docsrs, feature(doc_cfg))]
mod codelet;
mod direct;
mod err;
mod hc2hc;
mod mirrored;
mod ops;
mod planner;
mod problem;
mod util;
mod vector_loop;

pub use codelet::{CodeletLayout, CodeletQuery, Hc2hcGeneric, Hc2hcPaired, HcCodelet};
pub use direct::make_direct_solver;
pub use err::HcftError;
pub use hc2hc::{Hc2hcOptions, make_dit_solver, make_ditbuf_solver};
pub use mirrored::{HcWindow, MirroredAxis, unpack_halfcomplex};
pub use ops::OpCount;
pub use planner::{NopPlan, Planner, PlannerFlags, RdftPlan, Score, Solver};
pub use problem::{IoDim, RdftKind, RdftProblem};
pub use vector_loop::make_vector_loop_solver;

use num_traits::{AsPrimitive, Float};
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// Floating point type the transforms operate on.
pub trait HcSample:
    Float + Default + Debug + Display + Send + Sync + 'static + AsPrimitive<f64>
{
}

impl HcSample for f32 {}
impl HcSample for f64 {}

pub struct Hcft {}

impl Hcft {
    fn strategy<T: HcSample>(
        problem: &RdftProblem,
        flags: PlannerFlags,
    ) -> Result<Arc<dyn RdftPlan<T> + Send + Sync>, HcftError>
    where
        f64: AsPrimitive<T>,
    {
        let planner = Planner::<T>::with_default_solvers(flags, Hc2hcOptions::default());
        planner.plan(problem)
    }

    /// Plans a contiguous real to half-complex transform of size `n`.
    pub fn make_r2hc_f32(n: usize) -> Result<Arc<dyn RdftPlan<f32> + Send + Sync>, HcftError> {
        Hcft::strategy(&RdftProblem::r2hc(n), PlannerFlags::default())
    }

    /// Plans a contiguous real to half-complex transform of size `n`.
    pub fn make_r2hc_f64(n: usize) -> Result<Arc<dyn RdftPlan<f64> + Send + Sync>, HcftError> {
        Hcft::strategy(&RdftProblem::r2hc(n), PlannerFlags::default())
    }

    /// Plans `howmany` consecutive contiguous transforms of size `n`.
    pub fn make_r2hc_batched_f32(
        n: usize,
        howmany: usize,
    ) -> Result<Arc<dyn RdftPlan<f32> + Send + Sync>, HcftError> {
        Hcft::strategy(
            &RdftProblem::r2hc_batched(n, howmany),
            PlannerFlags::default(),
        )
    }

    /// Plans `howmany` consecutive contiguous transforms of size `n`.
    pub fn make_r2hc_batched_f64(
        n: usize,
        howmany: usize,
    ) -> Result<Arc<dyn RdftPlan<f64> + Send + Sync>, HcftError> {
        Hcft::strategy(
            &RdftProblem::r2hc_batched(n, howmany),
            PlannerFlags::default(),
        )
    }
}
