//! Host-side preview: `cargo run` builds the banner with wasm-pack into
//! `static/pkg` and serves `static/` locally so the canvas can be checked in
//! a browser.

use std::env;
use std::process::{exit, Command, Stdio};

const DEFAULT_PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if cfg!(target_arch = "wasm32") {
        return;
    }

    let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.into());
    if port.parse::<u16>().is_err() {
        eprintln!("PORT must be a number, got `{port}`");
        exit(2);
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/); serving existing static/pkg."
            );
        }
    }

    println!("Serving hero banner preview at http://127.0.0.1:{port}/ (Ctrl-C to stop)");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port, "--bind", "127.0.0.1", "--directory", "static"])
        .stdout(Stdio::null())
        .status();
    match status {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("preview server exited with {st}");
            exit(1);
        }
        Err(err) => {
            eprintln!("failed to start preview server (python3 required): {err}");
            exit(1);
        }
    }
}
