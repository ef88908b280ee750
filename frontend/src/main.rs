use zoon::*;

mod app;
mod dataflow;
mod theme;
mod tokens;

mod features;
mod footer;
mod header;
mod hero;
mod payment_flow;
mod recurring;
mod tools;
mod webhooks;

pub fn main() {
    let app = app::PaytoolsApp::new();
    zoon::println!("PayTools starting, theme: {:?}", app.theme.current());
    let root_element = app.root();
    start_app("app", move || root_element);
}
