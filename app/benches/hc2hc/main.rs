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
use criterion::{Criterion, criterion_group, criterion_main};
use hcft::{
    Hc2hcGeneric, Hc2hcOptions, Hc2hcPaired, HcCodelet, Hcft, Planner, PlannerFlags,
    RdftProblem, make_direct_solver, make_dit_solver, make_ditbuf_solver,
    make_vector_loop_solver,
};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;
use std::sync::Arc;
use std::time::Duration;

fn codelets() -> Vec<Arc<dyn HcCodelet<f64> + Send + Sync>> {
    vec![
        Arc::new(Hc2hcGeneric::<f64, 2>::new()),
        Arc::new(Hc2hcGeneric::<f64, 4>::new()),
        Arc::new(Hc2hcGeneric::<f64, 8>::new()),
    ]
}

/// Planner restricted to one half-complex variant, so both can be timed apart.
fn restricted_planner(buffered: bool) -> Planner<f64> {
    let mut planner = Planner::new(PlannerFlags::default());
    planner.register(make_direct_solver());
    planner.register(make_vector_loop_solver());
    for codelet in codelets() {
        if buffered {
            planner.register(make_ditbuf_solver(codelet, Hc2hcOptions::default()));
        } else {
            planner.register(make_dit_solver(codelet));
        }
    }
    if buffered {
        planner.register(make_ditbuf_solver(
            Arc::new(Hc2hcPaired::<f64, 4>::new()),
            Hc2hcOptions::default(),
        ));
    }
    planner
}

fn check_size(c: &mut Criterion, n: usize) {
    let mut input = vec![0f64; n];
    for z in input.iter_mut() {
        *z = rand::rng().random();
    }
    let problem = RdftProblem::r2hc(n);

    c.bench_function(format!("hcft ditbuf {n}").as_str(), |b| {
        let plan = restricted_planner(true).plan(&problem).unwrap();
        let mut output = vec![0f64; n];
        b.iter(|| {
            plan.execute_out_of_place(&input, &mut output).unwrap();
        })
    });

    c.bench_function(format!("hcft dit {n}").as_str(), |b| {
        let plan = restricted_planner(false).plan(&problem).unwrap();
        let mut output = vec![0f64; n];
        b.iter(|| {
            plan.execute_out_of_place(&input, &mut output).unwrap();
        })
    });

    c.bench_function(format!("hcft {n}").as_str(), |b| {
        let plan = Hcft::make_r2hc_f64(n).unwrap();
        let mut working = input.to_vec();
        b.iter(|| {
            plan.execute(&mut working).unwrap();
        })
    });

    c.bench_function(format!("rustfft {n}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(n);
        let mut working = input
            .iter()
            .map(|&x| Complex::new(x, 0.))
            .collect::<Vec<_>>();
        b.iter(|| {
            plan.process(&mut working);
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for n in [256usize, 1024, 4096, 8192] {
        check_size(c, n);
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = criterion_benchmark
}
criterion_main!(benches);
