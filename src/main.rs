use gui::Gui;
use iced::Size;
use log::info;
use sim::initial_parameters::InitialParameters;

mod gui;
mod sim;

fn main() -> iced::Result {
    env_logger::init();

    let params = InitialParameters::default();
    let mut window_settings = iced::window::Settings::default();
    window_settings.size = Size::new(params.window_width, params.window_height);
    window_settings.resizable = false;
    info!(
        "Opening {}x{} window",
        params.window_width, params.window_height
    );

    iced::application("Solar System", Gui::update, Gui::view)
        .subscription(Gui::subscription)
        .antialiasing(true)
        .window(window_settings)
        .run()
}
