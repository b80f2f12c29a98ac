use std::env;

fn main() {
    let api_url = env::var("ROSTER_API_URL").unwrap_or_default();
    let backend = env::var("ROSTER_BACKEND").unwrap_or_else(|_| String::from("http"));

    println!("cargo:rerun-if-env-changed=ROSTER_API_URL");
    println!("cargo:rerun-if-env-changed=ROSTER_BACKEND");
    println!("cargo:rustc-env=ROSTER_API_URL={}", api_url);
    println!("cargo:rustc-env=ROSTER_BACKEND={}", backend);
}
