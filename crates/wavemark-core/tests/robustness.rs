mod common;

use common::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wavemark_core::{
    degrade_with_rng, embed, extract, mean_absolute_error, psnr, WatermarkOptions,
};

const TRIALS: u64 = 3;

fn blind_error(sigma: f64) -> f64 {
    let options = WatermarkOptions::default();
    let payload = checkerboard(PAYLOAD, 8);
    let watermarked = embed(&midrange_host(11), &payload, &options).unwrap();

    let total: f64 = (0..TRIALS)
        .map(|trial| {
            let mut rng = ChaCha8Rng::seed_from_u64(100 + trial);
            let noisy = degrade_with_rng(&watermarked, sigma, &mut rng).unwrap();
            let recovered = extract(&noisy, None, &options).unwrap();
            mean_absolute_error(&recovered, &as_float(&payload)).unwrap()
        })
        .sum();

    total / TRIALS as f64
}

#[test]
fn should_not_get_better_with_more_noise_on_average() {
    let errors: Vec<f64> = [0.0, 40.0, 80.0].into_iter().map(blind_error).collect();

    assert!(errors[0] <= errors[1], "{errors:?}");
    assert!(errors[1] <= errors[2], "{errors:?}");
}

#[test]
fn should_lose_fidelity_with_growing_noise() {
    let host = midrange_host(12);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let mild = degrade_with_rng(&host, 5.0, &mut rng).unwrap();
    let strong = degrade_with_rng(&host, 25.0, &mut rng).unwrap();

    assert!(psnr(&host, &mild).unwrap() > psnr(&host, &strong).unwrap());
}

#[test]
fn should_still_extract_from_a_noisy_copy_with_the_reference() {
    let host = textured_host(13);
    let payload = checkerboard(PAYLOAD, 8);
    let options = WatermarkOptions::default();
    let watermarked = embed(&host, &payload, &options).unwrap();
    let noisy = degrade_with_rng(&watermarked, 15.0, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();

    let recovered = extract(&noisy, Some(&host), &options).unwrap();

    assert_eq!(recovered.dim(), (PAYLOAD, PAYLOAD));
    assert!(recovered.iter().all(|v| v.is_finite()));
}
