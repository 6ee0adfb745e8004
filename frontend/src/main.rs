//! Browser entry point wiring the showcase page interactions.

mod app;
mod capabilities;
mod config;
mod dom;
mod error;

fn report(err: &error::FrontendError) {
    web_sys::console::error_1(&format!("Failed to initialise page interactions: {err}").into());
}

fn main() {
    let ready = app::on_dom_ready(|| {
        if let Err(err) = app::start() {
            report(&err);
        }
    });
    if let Err(err) = ready {
        report(&err);
    }
}
