use octo::{associator, commutator, AlgebraError, Cayley, Klein};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), AlgebraError> {
    println!("=== CAYLEY OCTONIONS (definite) ===");

    let x = Cayley::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let y = Cayley::new(-1.0, 0.5, 2.0, 0.0, 1.0, -3.0, 0.25, 2.0);
    println!("x = {}", x);
    println!("y = {}", y);
    println!("x * y = {}", x * y);
    println!("N(x) N(y) = {}, N(xy) = {}", x.quad() * y.quad(), (x * y).quad());
    println!("x / y = {}", x.quo(&y)?);

    let i = Cayley::basis(1).unwrap_or_default();
    let j = Cayley::basis(2).unwrap_or_default();
    let m = Cayley::basis(4).unwrap_or_default();
    println!("[i, j] = {}", commutator(i, j));
    println!("[i, j, m] = {}", associator(i, j, m));

    let (r, theta) = x.polar();
    println!("polar(x): r = {:.6}, angles = {:.4?}", r, theta);

    match Cayley::zero().inv() {
        Ok(z) => println!("1/0 = {}", z),
        Err(e) => println!("1/0 rejected: {}", e),
    }

    println!("\n=== KLEIN OCTONIONS (split) ===");

    let null = Klein::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    println!("z = {}, N(z) = {}", null, null.quad());
    println!("1/z = {}", null.inv()?);
    match null.checked_inv() {
        Ok(z) => println!("checked 1/z = {}", z),
        Err(e) => println!("checked 1/z rejected: {}", e),
    }

    let mut rng = StdRng::seed_from_u64(0x0C70);
    let w = Klein::sample_null(&mut rng, 1.0)?;
    println!("sampled null element {} has N = {:e}", w, w.quad());

    Ok(())
}
