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
#![no_main]

use hcft::{
    Hc2hcGeneric, Hc2hcOptions, HcCodelet, Planner, PlannerFlags, RdftProblem,
    make_direct_solver, make_ditbuf_solver, make_vector_loop_solver,
};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    cofactor: u8,
    radix: u8,
    batch_size: u8,
    howmany: u8,
    re: f64,
}

fuzz_target!(|data: Target| {
    if data.cofactor == 0 || data.howmany == 0 || data.howmany > 4 {
        return;
    }
    if !data.re.is_finite() || data.re.abs() > 10000. {
        return;
    }
    let Ok(options) = Hc2hcOptions::new(data.batch_size as usize % 9) else {
        return;
    };
    let codelet: Arc<dyn HcCodelet<f64> + Send + Sync> = match data.radix % 4 {
        0 => Arc::new(Hc2hcGeneric::<f64, 2>::new()),
        1 => Arc::new(Hc2hcGeneric::<f64, 3>::new()),
        2 => Arc::new(Hc2hcGeneric::<f64, 4>::new()),
        _ => Arc::new(Hc2hcGeneric::<f64, 5>::new()),
    };
    let n = codelet.radix() * data.cofactor as usize;
    let howmany = data.howmany as usize;
    let problem = RdftProblem::r2hc_batched(n, howmany);

    let mut buffered = Planner::<f64>::new(PlannerFlags::default());
    buffered.register(make_ditbuf_solver(codelet, options));
    buffered.register(make_vector_loop_solver());
    buffered.register(make_direct_solver());
    let mut direct = Planner::<f64>::new(PlannerFlags::default());
    direct.register(make_direct_solver());

    let plan = buffered.plan(&problem).unwrap();
    let reference = direct.plan(&problem).unwrap();

    let input = (0..n * howmany)
        .map(|i| data.re + i as f64 * 0.1)
        .collect::<Vec<_>>();
    let mut output = input.clone();
    let mut expected = vec![0f64; n * howmany];
    plan.execute(&mut output).unwrap();
    reference
        .execute_out_of_place(&input, &mut expected)
        .unwrap();
    let scale = (data.re.abs() + n as f64) * n as f64;
    for (a, b) in output.iter().zip(expected.iter()) {
        assert!((a - b).abs() <= 1e-9 * scale, "{a} != {b} for size {n}");
    }
});
