use log::{debug, warn};

use crate::sim::units::{Float, AU};

pub(crate) const SCALE_STEP: Float = 0.5 / AU;
// One pixel per AU.
pub(crate) const MIN_SCALE: Float = 1. / AU;
pub(crate) const RADIUS_STEP: Float = 0.05;
pub(crate) const TIME_STEP_INCREASE: Float = 2_000.;
pub(crate) const TIME_STEP_DECREASE: Float = 2_500.;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Control {
    ZoomIn,
    ZoomOut,
    SpeedUp,
    SlowDown,
}

/// Snapshot of the controls held down during the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Controls {
    pub(crate) zoom_in: bool,
    pub(crate) zoom_out: bool,
    pub(crate) speed_up: bool,
    pub(crate) slow_down: bool,
}

impl Controls {
    pub(crate) fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::ZoomIn => self.zoom_in = held,
            Control::ZoomOut => self.zoom_out = held,
            Control::SpeedUp => self.speed_up = held,
            Control::SlowDown => self.slow_down = held,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SimulationParameters {
    // Pixels per meter.
    pub(crate) scale: Float,
    // Simulated seconds per tick. Negative values run time backwards.
    pub(crate) time_step: Float,
}

impl SimulationParameters {
    /// Applies one tick worth of held controls and returns the change of the on-screen body radii.
    pub(crate) fn apply_controls(&mut self, controls: &Controls) -> Float {
        let mut radius_delta = 0.;
        if controls.zoom_in {
            self.scale += SCALE_STEP;
            radius_delta = RADIUS_STEP;
            debug!("Zoomed in, scale is {} px/AU", self.scale * AU);
        } else if controls.zoom_out {
            if self.scale - SCALE_STEP >= MIN_SCALE {
                self.scale -= SCALE_STEP;
                radius_delta = -RADIUS_STEP;
                debug!("Zoomed out, scale is {} px/AU", self.scale * AU);
            } else {
                debug!("Scale is already at its minimum of {} px/AU", self.scale * AU);
            }
        }

        let previous_time_step = self.time_step;
        if controls.slow_down {
            self.time_step -= TIME_STEP_DECREASE;
        } else if controls.speed_up {
            self.time_step += TIME_STEP_INCREASE;
        }
        if self.time_step != previous_time_step {
            debug!("Time step is {} s", self.time_step);
            if previous_time_step > 0. && self.time_step <= 0. {
                warn!("Time step is no longer positive, the simulation runs backwards");
            }
        }

        radius_delta
    }
}
