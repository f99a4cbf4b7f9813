//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bravo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("bravo_core ping={}", bravo_core::ping());
    println!("bravo_core version={}", bravo_core::core_version());

    let seeded = bravo_core::Dashboard::seeded();
    println!("seed parties={}", seeded.parties.len());
    println!("seed birthdays={}", seeded.birthdays.len());
    println!("seed media_posts={}", seeded.media_posts.len());
}
