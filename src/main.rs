use dioxus::prelude::*;
use quotesheet::ui::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotesheet=info")),
        )
        .init();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Quotation Builder")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}
