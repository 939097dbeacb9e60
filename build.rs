use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=POKEDEX_RESOURCES_HINT");

    let hint = env::var("POKEDEX_RESOURCES_HINT").ok().or_else(|| {
        env::var("CARGO_MANIFEST_DIR")
            .ok()
            .map(|dir| format!("{dir}/resources/pokemon"))
    });

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=POKEDEX_RESOURCES_HINT={}",
            canonical.display()
        );
    }
}
