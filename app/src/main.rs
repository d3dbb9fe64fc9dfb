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
use hcft::{Hcft, RdftPlan, unpack_halfcomplex};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;
use std::time::Instant;

fn main() {
    for n in [64usize, 120, 512, 1000, 2048, 4096, 6000] {
        let mut input = vec![0f64; n];
        for z in input.iter_mut() {
            *z = rand::rng().random();
        }

        let planning = Instant::now();
        let plan = Hcft::make_r2hc_f64(n).unwrap();
        let planning = planning.elapsed();

        let mut output = vec![0f64; n];
        let execution = Instant::now();
        plan.execute_out_of_place(&input, &mut output).unwrap();
        let execution = execution.elapsed();

        let mut reference = input
            .iter()
            .map(|&x| Complex::new(x, 0.))
            .collect::<Vec<_>>();
        FftPlanner::new()
            .plan_fft_forward(n)
            .process(&mut reference);
        let mut unpacked = vec![Complex::<f64>::default(); n / 2 + 1];
        unpack_halfcomplex(&output, &mut unpacked);
        let max_error = unpacked
            .iter()
            .zip(reference.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0f64, f64::max);

        println!(
            "n {n}: estimated cost {:.0}, planned in {:?}, executed in {:?}, max error {:e}",
            plan.ops().total(),
            planning,
            execution,
            max_error
        );
    }
}
