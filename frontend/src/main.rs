#[cfg(target_arch = "wasm32")]
fn main() {
    enterprise_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("enterprise-frontend runs in the browser; build it for wasm32 with trunk");
}
