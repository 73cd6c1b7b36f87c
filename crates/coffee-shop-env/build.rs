//! Forwards the production environment values to the compiler.
//!
//! Values come from the build environment, or from a `.env` file found in the
//! crate directory or any of its parents.

const PRODUCTION_KEYS: &[&str] = &[
    "COFFEE_SHOP_PROD_API_SERVER_URL",
    "COFFEE_SHOP_PROD_AUTH0_URL",
    "COFFEE_SHOP_PROD_AUTH0_AUDIENCE",
    "COFFEE_SHOP_PROD_AUTH0_CLIENT_ID",
    "COFFEE_SHOP_PROD_AUTH0_CALLBACK_URL",
];

fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    for key in PRODUCTION_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
