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
use crate::codelet::{Hc2hcGeneric, Hc2hcPaired, HcCodelet};
use crate::direct::make_direct_solver;
use crate::hc2hc::{Hc2hcOptions, make_dit_solver, make_ditbuf_solver};
use crate::ops::OpCount;
use crate::problem::RdftProblem;
use crate::vector_loop::make_vector_loop_solver;
use crate::{HcSample, HcftError};
use log::{debug, trace};
use num_traits::AsPrimitive;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

/// Executable, problem specific transform.
///
/// Slices are addressed with the strides of the problem the plan was made
/// for and must cover its whole extent.
pub trait RdftPlan<T> {
    fn execute(&self, in_place: &mut [T]) -> Result<(), HcftError>;

    fn execute_out_of_place(&self, input: &[T], output: &mut [T]) -> Result<(), HcftError>;

    /// Estimated cost of one execution, used to rank candidate plans.
    fn ops(&self) -> OpCount;
}

/// How desirable a solver is for a problem. Ordered from worst to best.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Score {
    Reject,
    Discouraged,
    Preferred,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlannerFlags {
    /// Forbid decompositions that recurse over vector (batch) dimensions.
    pub no_vector_recursion: bool,
}

/// A strategy the planner may pick for a problem.
pub trait Solver<T> {
    fn name(&self) -> &'static str;

    fn applicable(&self, problem: &RdftProblem) -> bool;

    fn score(&self, problem: &RdftProblem, flags: PlannerFlags) -> Score;

    /// Builds a plan, child problems are planned through `planner`.
    /// Returns `None` when the solver cannot handle the problem after all.
    fn make_plan(
        &self,
        problem: &RdftProblem,
        planner: &Planner<T>,
    ) -> Result<Option<Arc<dyn RdftPlan<T> + Send + Sync>>, HcftError>;
}

/// Plan that does nothing, for empty child problems.
pub struct NopPlan<T> {
    phantom_data: PhantomData<T>,
}

impl<T> NopPlan<T> {
    pub fn new() -> Self {
        NopPlan {
            phantom_data: PhantomData,
        }
    }
}

impl<T> Default for NopPlan<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RdftPlan<T> for NopPlan<T> {
    fn execute(&self, _: &mut [T]) -> Result<(), HcftError> {
        Ok(())
    }

    fn execute_out_of_place(&self, _: &[T], _: &mut [T]) -> Result<(), HcftError> {
        Ok(())
    }

    fn ops(&self) -> OpCount {
        OpCount::zero()
    }
}

type SharedPlan<T> = Arc<dyn RdftPlan<T> + Send + Sync>;

/// Cost based search over a table of registered solvers.
///
/// The best plan found for each problem is remembered, so child problems
/// shared between candidate decompositions are solved once. A problem that
/// comes back while it is still being planned (a radix step of cofactor 1
/// asks for itself as the first child) has no plan on that path.
pub struct Planner<T> {
    solvers: Vec<Arc<dyn Solver<T> + Send + Sync>>,
    flags: PlannerFlags,
    solved: Mutex<HashMap<RdftProblem, SharedPlan<T>>>,
    planning: Mutex<HashSet<RdftProblem>>,
}

impl<T: HcSample> Planner<T> {
    pub fn new(flags: PlannerFlags) -> Self {
        Planner {
            solvers: Vec::new(),
            flags,
            solved: Mutex::new(HashMap::new()),
            planning: Mutex::new(HashSet::new()),
        }
    }

    pub fn register(&mut self, solver: Arc<dyn Solver<T> + Send + Sync>) {
        self.solvers.push(solver);
    }

    pub fn flags(&self) -> PlannerFlags {
        self.flags
    }

    pub fn solvers(&self) -> &[Arc<dyn Solver<T> + Send + Sync>] {
        &self.solvers
    }

    /// Plans `problem`, failing when no registered solver can handle it.
    pub fn plan(&self, problem: &RdftProblem) -> Result<SharedPlan<T>, HcftError> {
        if problem.is_empty() {
            return Err(HcftError::ZeroSizedTransform);
        }
        self.plan_child(problem)?
            .ok_or(HcftError::NoApplicablePlan(problem.length()))
    }

    pub(crate) fn plan_child(
        &self,
        problem: &RdftProblem,
    ) -> Result<Option<SharedPlan<T>>, HcftError> {
        // A poisoned cache is skipped, it only costs planning again.
        if let Ok(solved) = self.solved.lock() {
            if let Some(plan) = solved.get(problem) {
                return Ok(Some(plan.clone()));
            }
        }

        if !self.planning().insert(problem.clone()) {
            trace!("size {} is already being planned", problem.length());
            return Ok(None);
        }
        let searched = self.search(problem);
        self.planning().remove(problem);
        searched
    }

    /// In-progress set; it guards against cycles, so a poisoned lock is recovered.
    fn planning(&self) -> MutexGuard<'_, HashSet<RdftProblem>> {
        self.planning
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn search(&self, problem: &RdftProblem) -> Result<Option<SharedPlan<T>>, HcftError> {
        let mut best: Option<(Score, f64, &'static str, SharedPlan<T>)> = None;

        for solver in self.solvers.iter() {
            let score = solver.score(problem, self.flags);
            if score == Score::Reject {
                trace!("{} rejected size {}", solver.name(), problem.length());
                continue;
            }
            let Some(plan) = solver.make_plan(problem, self)? else {
                trace!("{} produced no plan for size {}", solver.name(), problem.length());
                continue;
            };
            let cost = plan.ops().total();
            debug!(
                "{} scored {:?} with cost {} for size {} x {}",
                solver.name(),
                score,
                cost,
                problem.length(),
                problem.howmany()
            );
            let better = match &best {
                None => true,
                Some((best_score, best_cost, _, _)) => {
                    score > *best_score || (score == *best_score && cost < *best_cost)
                }
            };
            if better {
                best = Some((score, cost, solver.name(), plan));
            }
        }

        let Some((score, cost, name, plan)) = best else {
            return Ok(None);
        };
        debug!(
            "selected {} ({:?}, cost {}) for size {} x {}",
            name,
            score,
            cost,
            problem.length(),
            problem.howmany()
        );
        if let Ok(mut solved) = self.solved.lock() {
            solved.insert(problem.clone(), plan.clone());
        }
        Ok(Some(plan))
    }
}

impl<T: HcSample> Planner<T>
where
    f64: AsPrimitive<T>,
{
    /// Planner with the direct and vector loop solvers and both half-complex
    /// Cooley-Tukey variants for every built-in kernel.
    pub fn with_default_solvers(flags: PlannerFlags, options: Hc2hcOptions) -> Self {
        let mut planner = Planner::new(flags);
        planner.register(make_direct_solver());
        planner.register(make_vector_loop_solver());

        let generic: [Arc<dyn HcCodelet<T> + Send + Sync>; 5] = [
            Arc::new(Hc2hcGeneric::<T, 2>::new()),
            Arc::new(Hc2hcGeneric::<T, 3>::new()),
            Arc::new(Hc2hcGeneric::<T, 4>::new()),
            Arc::new(Hc2hcGeneric::<T, 5>::new()),
            Arc::new(Hc2hcGeneric::<T, 8>::new()),
        ];
        for codelet in generic {
            planner.register(make_dit_solver(codelet.clone()));
            planner.register(make_ditbuf_solver(codelet, options));
        }

        // Paired kernels only accept the scratch layout, so they never apply unbuffered.
        let paired: [Arc<dyn HcCodelet<T> + Send + Sync>; 2] = [
            Arc::new(Hc2hcPaired::<T, 2>::new()),
            Arc::new(Hc2hcPaired::<T, 4>::new()),
        ];
        for codelet in paired {
            planner.register(make_ditbuf_solver(codelet, options));
        }
        planner
    }
}
