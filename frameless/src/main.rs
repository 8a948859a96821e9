mod app;
mod bridge;
mod components;
mod config;
mod controller;
mod icons;
mod routers;
#[cfg(test)]
mod scenarios;
mod theme;
mod widgets;

use env_logger::Env;

use crate::app::App;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // A daemon outlives its last window, which lets the quit policy decide
    // whether closing the window ends the process.
    iced::daemon(App::new, App::update, App::view)
        .title(App::title)
        .antialiasing(true)
        .subscription(App::subscription)
        .run()
}
