use std::time::Duration;

use iced::{
    keyboard::{self, key, Key},
    time,
    widget::Canvas,
    Element, Length, Subscription,
};
use log::trace;

use crate::sim::{
    controls::{Control, Controls},
    initial_parameters::InitialParameters,
    system::StellarSystem,
};

mod canvas;

use canvas::OrbitCanvas;

pub(crate) const TICKS_PER_SECOND: u64 = 60;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Message {
    Tick,
    ControlPressed(Control),
    ControlReleased(Control),
}

pub(crate) struct Gui {
    system: StellarSystem,
    controls: Controls,
}

impl Default for Gui {
    fn default() -> Self {
        Gui::new(&InitialParameters::default())
    }
}

fn control_for(pressed: &Key) -> Option<Control> {
    match pressed {
        Key::Named(key::Named::ArrowDown) => Some(Control::ZoomIn),
        Key::Named(key::Named::ArrowUp) => Some(Control::ZoomOut),
        Key::Named(key::Named::ArrowRight) => Some(Control::SpeedUp),
        Key::Named(key::Named::ArrowLeft) => Some(Control::SlowDown),
        _ => None,
    }
}

impl Gui {
    pub(crate) fn new(params: &InitialParameters) -> Self {
        Gui {
            system: StellarSystem::new(params),
            controls: Controls::default(),
        }
    }

    pub(crate) fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                self.system.apply_controls(&self.controls);
                self.system.do_evolution_step();
            }
            Message::ControlPressed(control) => {
                trace!("{:?} pressed", control);
                self.controls.set(control, true);
            }
            Message::ControlReleased(control) => {
                trace!("{:?} released", control);
                self.controls.set(control, false);
            }
        }
    }

    pub(crate) fn view(&self) -> Element<'_, Message> {
        Canvas::new(OrbitCanvas::new(&self.system))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub(crate) fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            time::every(Duration::from_secs_f64(1. / TICKS_PER_SECOND as f64))
                .map(|_| Message::Tick),
            keyboard::on_key_press(|key, _modifiers| {
                control_for(&key).map(Message::ControlPressed)
            }),
            keyboard::on_key_release(|key, _modifiers| {
                control_for(&key).map(Message::ControlReleased)
            }),
        ])
    }
}
