use log::{info, trace};

use crate::sim::{
    body::Body,
    controls::{Controls, SimulationParameters},
    initial_parameters::InitialParameters,
    units::{Float, DIMENSIONALITY},
};

#[derive(Clone, Debug)]
pub(crate) struct StellarSystem {
    pub(crate) current_time: Float,
    pub(crate) parameters: SimulationParameters,
    pub(crate) bodies: Vec<Body>,
}

impl StellarSystem {
    pub(crate) fn new(params: &InitialParameters) -> StellarSystem {
        let bodies = params.bodies.iter().map(Body::new).collect::<Vec<Body>>();
        info!(
            "Created stellar system with {} bodies, time step {} s",
            bodies.len(),
            params.time_step
        );
        StellarSystem {
            current_time: 0.,
            parameters: SimulationParameters {
                scale: params.scale,
                time_step: params.time_step,
            },
            bodies,
        }
    }

    pub(crate) fn apply_controls(&mut self, controls: &Controls) {
        let radius_delta = self.parameters.apply_controls(controls);
        if radius_delta != 0. {
            for body in self.bodies.iter_mut() {
                body.display_radius += radius_delta;
            }
        }
    }

    /// Net force on the body at `index`, together with its distance to the center body if there is one.
    fn get_net_force(&self, index: usize) -> ([Float; DIMENSIONALITY], Option<Float>) {
        let body = &self.bodies[index];
        let mut total_force = [0.; DIMENSIONALITY];
        let mut center_distance = None;
        for (j, other) in self.bodies.iter().enumerate() {
            if index == j {
                continue;
            }
            if other.is_center {
                center_distance = Some(body.distance_to(other));
            }
            let force = body.attraction_to(other);
            for k in 0..DIMENSIONALITY {
                total_force[k] += force[k];
            }
        }
        (total_force, center_distance)
    }

    /// Advances every body by one time step.
    ///
    /// Bodies move one after another, so later bodies are attracted towards the
    /// already advanced positions of earlier ones.
    pub(crate) fn do_evolution_step(&mut self) {
        let time_step = self.parameters.time_step;
        for i in 0..self.bodies.len() {
            let (force, center_distance) = self.get_net_force(i);
            let body = &mut self.bodies[i];
            if let Some(distance) = center_distance {
                body.center_distance = distance;
            }
            body.advance(force, time_step);
        }
        self.current_time += time_step;
        trace!("Simulated time is {} s", self.current_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::initial_parameters::BodyParameters;
    use crate::sim::units::{AU, G};

    fn body(name: &'static str, position: [Float; 2], velocity: [Float; 2], mass: Float) -> Body {
        let mut body = Body::new(&BodyParameters {
            name,
            mass,
            distance: 0.,
            speed: 0.,
            color: [255, 255, 255],
            radius: 10.,
            is_center: false,
        });
        body.position = position;
        body.velocity = velocity;
        body
    }

    fn system(bodies: Vec<Body>, time_step: Float) -> StellarSystem {
        StellarSystem {
            current_time: 0.,
            parameters: SimulationParameters {
                scale: 100. / AU,
                time_step,
            },
            bodies,
        }
    }

    fn assert_close(actual: Float, expected: Float) {
        println!("actual: {}, expected: {}", actual, expected);
        assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1e-9));
    }

    #[test]
    fn lone_body_does_not_attract_itself() {
        let lone = body("lone", [AU, -AU], [100., 200.], 1e30);
        let mut system = system(vec![lone], 0.);

        let (force, center_distance) = system.get_net_force(0);
        assert_eq!(force, [0., 0.]);
        assert!(center_distance.is_none());

        system.do_evolution_step();
        assert_eq!(system.bodies[0].velocity, [100., 200.]);
        assert_eq!(system.bodies[0].position, [AU, -AU]);
    }

    #[test]
    fn one_tick_matches_hand_computed_euler_step() {
        const TIME_STEP: Float = 3_600.;
        const M1: Float = 1e30;
        const M2: Float = 1e24;
        let mut star = body("star", [0., 0.], [0., 0.], M1);
        star.is_center = true;
        let planet = body("planet", [AU, 0.], [0., 30_000.], M2);
        let mut system = system(vec![star, planet], TIME_STEP);

        system.do_evolution_step();

        // The star moves first, towards the planet.
        let star_acceleration = G * M2 / (AU * AU);
        let star_velocity = star_acceleration * TIME_STEP;
        let star_position = star_velocity * TIME_STEP;
        assert_close(system.bodies[0].velocity[0], star_velocity);
        assert_close(system.bodies[0].position[0], star_position);
        assert_eq!(system.bodies[0].velocity[1], 0.);
        assert_eq!(system.bodies[0].position[1], 0.);

        // The planet sees the star at its new position.
        let distance = AU - star_position;
        let planet_velocity = -G * M1 / (distance * distance) * TIME_STEP;
        assert_close(system.bodies[1].velocity[0], planet_velocity);
        assert_close(system.bodies[1].velocity[1], 30_000.);
        assert_close(system.bodies[1].position[0], AU + planet_velocity * TIME_STEP);
        assert_close(system.bodies[1].position[1], 30_000. * TIME_STEP);
        assert_close(system.bodies[1].center_distance, distance);
        assert_close(system.current_time, TIME_STEP);
    }

    #[test]
    fn trail_records_visited_positions_in_order() {
        const TICKS: usize = 25;
        let star = body("star", [0., 0.], [0., 0.], 1.989e30);
        let planet = body("planet", [-AU, 0.], [0., 29.8e3], 5.972e24);
        let mut system = system(vec![star, planet], 70_000.);

        let mut visited = vec![];
        for _ in 0..TICKS {
            system.do_evolution_step();
            visited.push(system.bodies[1].position);
        }

        assert_eq!(system.bodies[0].trail().len(), TICKS);
        assert_eq!(system.bodies[1].trail().len(), TICKS);
        assert_eq!(system.bodies[1].trail(), visited.as_slice());
    }

    #[test]
    fn planet_stays_in_orbit_for_a_year() {
        let mut params = InitialParameters::default();
        params.bodies.truncate(2);
        let mut system = StellarSystem::new(&params);
        system.parameters.time_step = 3_600.;

        while system.current_time < 365.25 * 24. * 3_600. {
            system.do_evolution_step();
            let distance = system.bodies[1].distance_to(&system.bodies[0]);
            assert!(distance > 0.95 * AU && distance < 1.05 * AU);
        }
    }

    #[test]
    fn zooming_resizes_every_body() {
        let mut system = StellarSystem::new(&InitialParameters::default());
        let radii = system
            .bodies
            .iter()
            .map(|b| b.display_radius)
            .collect::<Vec<Float>>();
        let controls = Controls {
            zoom_in: true,
            ..Controls::default()
        };

        system.apply_controls(&controls);

        for (body, radius) in system.bodies.iter().zip(radii.iter()) {
            assert!((body.display_radius - radius - 0.05).abs() < 1e-12);
        }
    }

    #[test]
    fn zooming_out_and_back_in_restores_radii() {
        let mut system = StellarSystem::new(&InitialParameters::default());
        let radii = system
            .bodies
            .iter()
            .map(|b| b.display_radius)
            .collect::<Vec<Float>>();
        let zoom_out = Controls {
            zoom_out: true,
            ..Controls::default()
        };
        let zoom_in = Controls {
            zoom_in: true,
            ..Controls::default()
        };

        let mut applied = 0;
        for _ in 0..1_000 {
            let scale = system.parameters.scale;
            system.apply_controls(&zoom_out);
            if system.parameters.scale != scale {
                applied += 1;
            }
        }
        println!("Zoomed out {} times", applied);
        assert!(applied > 0);
        assert!(system.parameters.scale > 0.);

        for _ in 0..applied {
            system.apply_controls(&zoom_in);
        }

        for (body, radius) in system.bodies.iter().zip(radii.iter()) {
            println!("{}: {} -> {}", body.name, radius, body.display_radius);
            assert!((body.display_radius - radius).abs() < 1e-9);
        }
    }
}
