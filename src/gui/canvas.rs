use iced::{
    alignment, mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke, Text},
    Color, Pixels, Point, Rectangle, Renderer, Theme,
};

use crate::sim::{
    body::Body,
    system::StellarSystem,
    units::{Float, DIMENSIONALITY, METERS_PER_MILLION_KM},
};

const LABEL_SIZE: f32 = 16.;
const LABEL_GAP: f32 = 4.;
const TRAIL_WIDTH: f32 = 1.;

pub(crate) fn to_screen(position: &[Float; DIMENSIONALITY], scale: Float, center: Point) -> Point {
    Point::new(
        (position[0] * scale) as f32 + center.x,
        (position[1] * scale) as f32 + center.y,
    )
}

/// Screen points of a trail, or `None` while it is too short to form a line.
pub(crate) fn trail_points(
    trail: &[[Float; DIMENSIONALITY]],
    scale: Float,
    center: Point,
) -> Option<Vec<Point>> {
    if trail.len() < 2 {
        return None;
    }
    Some(trail.iter().map(|p| to_screen(p, scale, center)).collect())
}

/// Distance label of a planet. The center body is not labelled.
pub(crate) fn label_for(body: &Body) -> Option<String> {
    if body.is_center {
        return None;
    }
    Some(format!(
        "{}: {}e6 km",
        body.name,
        (body.center_distance / METERS_PER_MILLION_KM).round()
    ))
}

pub(crate) fn drawn_radius(body: &Body) -> f32 {
    body.display_radius.max(0.) as f32
}

pub(crate) struct OrbitCanvas<'a> {
    system: &'a StellarSystem,
}

impl<'a> OrbitCanvas<'a> {
    pub(crate) fn new(system: &'a StellarSystem) -> Self {
        OrbitCanvas { system }
    }

    fn draw_body(&self, frame: &mut Frame, body: &Body, center: Point) {
        let scale = self.system.parameters.scale;

        if let Some(points) = trail_points(body.trail(), scale, center) {
            let trail = Path::new(|builder| {
                builder.move_to(points[0]);
                for point in points.iter().skip(1) {
                    builder.line_to(*point);
                }
            });
            frame.stroke(
                &trail,
                Stroke::default()
                    .with_color(Color::WHITE)
                    .with_width(TRAIL_WIDTH),
            );
        }

        let position = to_screen(&body.position, scale, center);
        let radius = drawn_radius(body);
        let [r, g, b] = body.color;
        frame.fill(&Path::circle(position, radius), Color::from_rgb8(r, g, b));

        if let Some(label) = label_for(body) {
            frame.fill_text(Text {
                content: label,
                position: Point::new(position.x, position.y - radius - LABEL_GAP),
                color: Color::WHITE,
                size: Pixels(LABEL_SIZE),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Bottom,
                ..Text::default()
            });
        }
    }
}

impl<Message> canvas::Program<Message> for OrbitCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        let center = frame.center();
        for body in self.system.bodies.iter() {
            self.draw_body(&mut frame, body, center);
        }

        vec![frame.into_geometry()]
    }
}
