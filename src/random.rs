use rand::Rng;

/// Uniformly pick one element. `items` must not be empty.
pub fn pick_one<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.gen_range(0..items.len())]
}

/// Uniform integer in the closed range `[low, high]`.
pub fn int_between<R>(rng: &mut R, low: u32, high: u32) -> u32
where
    R: Rng + ?Sized,
{
    rng.gen_range(low..=high)
}
