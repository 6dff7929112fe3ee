#[cfg(target_arch = "wasm32")]
pub fn main() {
    authportal_web::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
