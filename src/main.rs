#[cfg(feature = "yew")]
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    let config = activity_roster::Config::new();
    log::info!("Starting activity roster ({:?} backend)", config.backend);

    yew::Renderer::<activity_roster::App>::with_props(activity_roster::AppProps { config })
        .render();
}
#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
