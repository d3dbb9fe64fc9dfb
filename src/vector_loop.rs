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
use crate::ops::OpCount;
use crate::planner::{Planner, PlannerFlags, RdftPlan, Score, Solver};
use crate::problem::RdftProblem;
use crate::{HcSample, HcftError};
use std::marker::PhantomData;
use std::sync::Arc;

/// Runs a child plan once per index of the outermost vector dimension.
pub(crate) struct VectorLoop<T> {
    child: Arc<dyn RdftPlan<T> + Send + Sync>,
    count: usize,
    ivs: usize,
    ovs: usize,
    extent_in: usize,
    extent_out: usize,
    in_place: bool,
}

impl<T> RdftPlan<T> for VectorLoop<T> {
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
        for i in 0..self.count {
            self.child.execute(&mut in_place[i * self.ovs..])?;
        }
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
        for i in 0..self.count {
            self.child
                .execute_out_of_place(&input[i * self.ivs..], &mut output[i * self.ovs..])?;
        }
        Ok(())
    }

    fn ops(&self) -> OpCount {
        self.child.ops().times(self.count)
    }
}

struct VectorLoopSolver<T> {
    phantom_data: PhantomData<T>,
}

impl<T: HcSample> Solver<T> for VectorLoopSolver<T> {
    fn name(&self) -> &'static str {
        "rdft-vector-loop"
    }

    fn applicable(&self, problem: &RdftProblem) -> bool {
        problem.rank() == 1 && problem.vector_rank() > 0 && !problem.is_empty()
    }

    fn score(&self, problem: &RdftProblem, flags: PlannerFlags) -> Score {
        if !self.applicable(problem) {
            return Score::Reject;
        }
        if flags.no_vector_recursion {
            Score::Discouraged
        } else {
            Score::Preferred
        }
    }

    fn make_plan(
        &self,
        problem: &RdftProblem,
        planner: &Planner<T>,
    ) -> Result<Option<Arc<dyn RdftPlan<T> + Send + Sync>>, HcftError> {
        if !self.applicable(problem) {
            return Ok(None);
        }
        let mut inner = problem.clone();
        let Some(d) = inner.vecsz.pop() else {
            return Ok(None);
        };
        let Some(child) = planner.plan_child(&inner)? else {
            return Ok(None);
        };
        Ok(Some(Arc::new(VectorLoop {
            child,
            count: d.n,
            ivs: d.is,
            ovs: d.os,
            extent_in: problem.extent_in(),
            extent_out: problem.extent_out(),
            in_place: problem.in_place_compatible(),
        })))
    }
}

/// Solver peeling one vector dimension off a problem and planning the rest.
pub fn make_vector_loop_solver<T: HcSample>() -> Arc<dyn Solver<T> + Send + Sync> {
    Arc::new(VectorLoopSolver {
        phantom_data: PhantomData,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::make_direct_solver;
    use crate::problem::{IoDim, RdftKind};

    #[test]
    fn test_vector_loop_matches_direct() {
        let problem = RdftProblem::new(
            vec![IoDim::new(24, 1, 1)],
            vec![IoDim::new(4, 24, 24)],
            RdftKind::R2hc,
        );
        let mut looped = Planner::<f64>::new(PlannerFlags::default());
        looped.register(make_vector_loop_solver());
        looped.register(make_direct_solver());
        let mut direct = Planner::<f64>::new(PlannerFlags::default());
        direct.register(make_direct_solver());

        let a = looped.plan(&problem).unwrap();
        let b = direct.plan(&problem).unwrap();
        let input = (0..96).map(|x| (x as f64 * 0.11).cos()).collect::<Vec<_>>();
        let mut out_a = input.clone();
        let mut out_b = vec![0f64; 96];
        a.execute(&mut out_a).unwrap();
        b.execute_out_of_place(&input, &mut out_b).unwrap();
        for (x, y) in out_a.iter().zip(out_b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
        assert_eq!(a.ops(), b.ops());
    }

    #[test]
    fn test_vector_loop_scores() {
        let solver = make_vector_loop_solver::<f32>();
        let batched = RdftProblem::r2hc_batched(8, 2);
        assert_eq!(
            solver.score(&batched, PlannerFlags::default()),
            Score::Preferred
        );
        assert_eq!(
            solver.score(
                &batched,
                PlannerFlags {
                    no_vector_recursion: true
                }
            ),
            Score::Discouraged
        );
        assert_eq!(
            solver.score(&RdftProblem::r2hc(8), PlannerFlags::default()),
            Score::Reject
        );
    }
}
