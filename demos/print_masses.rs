//! Reference run: 100 masses on [0.1, 100] M☉, printed as a list.
//!
//! ```bash
//! cargo run --example print_masses
//! ```

fn main() -> Result<(), chabrier_imf::ImfError> {
    let masses = chabrier_imf::sample(0.1, 100.0, 100)?;
    println!("{:?}", masses);
    Ok(())
}
