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
use super::{Hc2hcPlan, Hc2hcVariant, hc2hc_applicable};
use crate::HcSample;
use crate::codelet::{CodeletLayout, CodeletQuery, HcCodelet};
use crate::mirrored::{HcWindow, MirroredAxis};
use crate::planner::{PlannerFlags, Score};
use crate::problem::RdftProblem;

/// Decimation in time with the kernel running straight on the output array.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Dit;

impl<T: HcSample> Hc2hcVariant<T> for Dit {
    fn name(&self) -> &'static str {
        "rdft-dit"
    }

    fn applicable(&self, codelet: &dyn HcCodelet<T>, problem: &RdftProblem) -> bool {
        if !hc2hc_applicable(codelet, problem) {
            return false;
        }
        let r = codelet.radix();
        let d = problem.sz[0];
        let m = d.n / r;
        codelet.okp(&CodeletQuery {
            im_offset: ((r * m).saturating_sub(2) * d.os) as isize,
            ios: (m * d.os) as isize,
            vs: 0,
            width: m,
            dist: d.os as isize,
        })
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
        if n > 512 && n / codelet.radix() > 4 {
            return Score::Discouraged;
        }
        Score::Preferred
    }

    fn finish(plan: &mut Hc2hcPlan<T, Self>) {
        plan.iios = plan.m * plan.os;
        plan.vs = MirroredAxis::new(plan.iios as isize);
        plan.ops = plan.children_ops() + plan.codelet_ops();
    }

    fn scratch_length(&self, _: &Hc2hcPlan<T, Self>) -> usize {
        0
    }

    fn apply_columns(&self, plan: &Hc2hcPlan<T, Self>, instance: &mut [T], _: &mut [T]) {
        if plan.columns() == 0 {
            return;
        }
        let os = plan.os;
        plan.codelet.execute(
            HcWindow::new(instance, os, (plan.r * plan.m - 1) * os),
            &plan.twiddles,
            CodeletLayout {
                ios: plan.vs,
                dist: MirroredAxis::new(os as isize),
                width: plan.m,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codelet::{Hc2hcGeneric, Hc2hcPaired};
    use crate::direct::make_direct_solver;
    use crate::hc2hc::{Hc2hcOptions, make_dit_solver};
    use crate::planner::Planner;
    use crate::problem::{IoDim, RdftKind};
    use rand::Rng;
    use std::sync::Arc;

    fn default_planner() -> Planner<f64> {
        Planner::with_default_solvers(PlannerFlags::default(), Hc2hcOptions::default())
    }

    #[test]
    fn test_dit_matches_direct() {
        let planner = default_planner();
        let codelets: [Arc<dyn HcCodelet<f64> + Send + Sync>; 3] = [
            Arc::new(Hc2hcGeneric::<f64, 2>::new()),
            Arc::new(Hc2hcGeneric::<f64, 3>::new()),
            Arc::new(Hc2hcGeneric::<f64, 5>::new()),
        ];
        for codelet in codelets {
            for m in [1usize, 2, 7, 12, 25] {
                let r = codelet.radix();
                // strided input, vector of two transforms with spaced output
                let problem = RdftProblem::new(
                    vec![IoDim::new(r * m, 2, 1)],
                    vec![IoDim::new(2, 1, r * m + 3)],
                    RdftKind::R2hc,
                );
                let plan = make_dit_solver(codelet.clone())
                    .make_plan(&problem, &planner)
                    .unwrap()
                    .unwrap();
                let direct = make_direct_solver::<f64>()
                    .make_plan(&problem, &planner)
                    .unwrap()
                    .unwrap();
                let mut input = vec![0f64; problem.extent_in()];
                for z in input.iter_mut() {
                    *z = rand::rng().random();
                }
                let mut a = vec![0f64; problem.extent_out()];
                let mut b = vec![0f64; problem.extent_out()];
                plan.execute_out_of_place(&input, &mut a).unwrap();
                direct.execute_out_of_place(&input, &mut b).unwrap();
                for (idx, (x, y)) in a.iter().zip(b.iter()).enumerate() {
                    assert!(
                        (x - y).abs() < 1e-9,
                        "{x} != {y} for radix {r} cofactor {m} at {idx}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_dit_rejects_scratch_only_kernels() {
        let solver = make_dit_solver::<f64>(Arc::new(Hc2hcPaired::<f64, 4>::new()));
        for m in [1usize, 2, 9, 17, 64] {
            assert!(!solver.applicable(&RdftProblem::r2hc(4 * m)), "m = {m}");
        }
    }

    #[test]
    fn test_dit_scores() {
        let solver = make_dit_solver::<f64>(Arc::new(Hc2hcGeneric::<f64, 4>::new()));
        let flags = PlannerFlags::default();
        assert_eq!(solver.score(&RdftProblem::r2hc(512), flags), Score::Preferred);
        assert_eq!(solver.score(&RdftProblem::r2hc(1024), flags), Score::Discouraged);
        assert_eq!(solver.score(&RdftProblem::r2hc(514), flags), Score::Reject);
        assert_eq!(
            solver.score(
                &RdftProblem::r2hc_batched(64, 4),
                PlannerFlags {
                    no_vector_recursion: true
                }
            ),
            Score::Reject
        );
    }

    #[test]
    fn test_dit_costs_no_staging() {
        let planner = default_planner();
        let codelet: Arc<dyn HcCodelet<f64> + Send + Sync> =
            Arc::new(Hc2hcGeneric::<f64, 4>::new());
        let problem = RdftProblem::r2hc(4 * 33);
        let dit = make_dit_solver(codelet.clone())
            .make_plan(&problem, &planner)
            .unwrap()
            .unwrap();
        let ditbuf = crate::hc2hc::make_ditbuf_solver(codelet, Hc2hcOptions::default())
            .make_plan(&problem, &planner)
            .unwrap()
            .unwrap();
        let difference = ditbuf.ops().other - dit.ops().other;
        assert_eq!(difference, (4 * 4 * 16) as f64);
        assert_eq!(ditbuf.ops().add, dit.ops().add);
    }
}
