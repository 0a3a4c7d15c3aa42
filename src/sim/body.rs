use crate::sim::initial_parameters::BodyParameters;
use crate::sim::units::{Float, AU, DIMENSIONALITY, G};

#[derive(Clone, Debug)]
pub(crate) struct Body {
    pub(crate) name: String,
    pub(crate) position: [Float; DIMENSIONALITY],
    pub(crate) velocity: [Float; DIMENSIONALITY],
    pub(crate) mass: Float,
    pub(crate) is_center: bool,
    trail: Vec<[Float; DIMENSIONALITY]>,
    // Distance to the center body as last seen by the integrator.
    pub(crate) center_distance: Float,
    pub(crate) color: [u8; 3],
    // On-screen radius in pixels, unrelated to the physical size. Zooming out
    // far enough drives it negative.
    pub(crate) display_radius: Float,
}

impl Body {
    pub(crate) fn new(params: &BodyParameters) -> Body {
        Body {
            name: params.name.to_string(),
            position: [params.distance * AU, 0.],
            velocity: [0., params.speed],
            mass: params.mass,
            is_center: params.is_center,
            trail: Vec::new(),
            center_distance: 0.,
            color: params.color,
            display_radius: params.radius,
        }
    }

    pub(crate) fn distance_to(&self, other: &Self) -> Float {
        let distance_x = other.position[0] - self.position[0];
        let distance_y = other.position[1] - self.position[1];
        (distance_x * distance_x + distance_y * distance_y).sqrt()
    }

    /// Gravitational force that `other` exerts on `self`, pointing from `self` towards `other`.
    ///
    /// Coinciding bodies produce non-finite components.
    pub(crate) fn attraction_to(&self, other: &Self) -> [Float; DIMENSIONALITY] {
        let distance_x = other.position[0] - self.position[0];
        let distance_y = other.position[1] - self.position[1];
        let distance = self.distance_to(other);

        let force = G * self.mass * other.mass / (distance * distance);
        let theta = distance_y.atan2(distance_x);
        [theta.cos() * force, theta.sin() * force]
    }

    /// Semi-implicit Euler step: the position moves with the velocity updated in the same step.
    pub(crate) fn advance(&mut self, force: [Float; DIMENSIONALITY], time_step: Float) {
        for k in 0..DIMENSIONALITY {
            self.velocity[k] += force[k] / self.mass * time_step;
        }
        for k in 0..DIMENSIONALITY {
            self.position[k] += self.velocity[k] * time_step;
        }
        self.trail.push(self.position);
    }

    pub(crate) fn trail(&self) -> &[[Float; DIMENSIONALITY]] {
        &self.trail
    }
}
