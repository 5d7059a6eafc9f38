use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Draw one sample from `Normal(mean, std_dev)`.
///
/// Scales a standard normal draw instead of building a distribution so that a
/// zero (or negative) deviation is accepted and a zero deviation returns `mean`.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}
