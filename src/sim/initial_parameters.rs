use super::units::{Float, AU};

pub(crate) struct BodyParameters {
    pub(crate) name: &'static str,
    pub(crate) mass: Float,
    // Signed distance from the center along the x-axis, in AU.
    pub(crate) distance: Float,
    // Initial velocity along the y-axis, in m/s.
    pub(crate) speed: Float,
    pub(crate) color: [u8; 3],
    pub(crate) radius: Float,
    pub(crate) is_center: bool,
}

impl BodyParameters {
    const fn planet(
        name: &'static str,
        mass: Float,
        distance: Float,
        speed: Float,
        color: [u8; 3],
        radius: Float,
    ) -> Self {
        Self {
            name,
            mass,
            distance,
            speed,
            color,
            radius,
            is_center: false,
        }
    }
}

pub(crate) struct InitialParameters {
    pub(crate) window_width: f32,
    pub(crate) window_height: f32,
    // Pixels per meter.
    pub(crate) scale: Float,
    // Simulated seconds per tick.
    pub(crate) time_step: Float,
    pub(crate) bodies: Vec<BodyParameters>,
}

const MERCURY_RED: [u8; 3] = [84, 9, 9];
const WHITE: [u8; 3] = [255, 255, 255];
const BLUE: [u8; 3] = [17, 20, 207];
const RED: [u8; 3] = [117, 11, 11];
const YELLOW: [u8; 3] = [153, 112, 23];

impl Default for InitialParameters {
    fn default() -> Self {
        let sun = BodyParameters {
            name: "Sun",
            mass: 1.989e30,
            distance: 0.,
            speed: 0.,
            color: [255, 255, 0],
            radius: 25.,
            is_center: true,
        };
        Self {
            window_width: 1550.,
            window_height: 800.,
            scale: 100. / AU,
            time_step: 70_000.,
            bodies: vec![
                sun,
                BodyParameters::planet("Earth", 5.972e24, -1., 29.8e3, BLUE, 9.),
                BodyParameters::planet("Mars", 6.39e23, -1.52, 24.1e3, RED, 10.),
                BodyParameters::planet("Mercury", 3.285e23, 0.387, -47.9e3, MERCURY_RED, 5.),
                BodyParameters::planet("Venus", 4.867e24, 0.72, -35.02e3, WHITE, 7.),
                BodyParameters::planet("Jupiter", 1.898e27, 5.4, 13.1e3, YELLOW, 21.),
                BodyParameters::planet("Saturn", 5.683e26, 9.5, 9.7e3, [224, 179, 13], 19.),
                BodyParameters::planet("Uranus", 8.68e25, 19.18, -6.8e3, [0, 174, 255], 16.),
                BodyParameters::planet("Neptune", 1.02e26, 30.06, 5.43e3, [0, 44, 242], 17.),
                BodyParameters::planet("Pluto", 1.29e22, 39.53, 4.67e3, [204, 184, 151], 1.),
            ],
        }
    }
}
