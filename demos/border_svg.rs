use groutline::{BorderOccluder, Direction, OccluderKind};
use plotters::prelude::*;

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> [[f64; 3]; 4] {
    [
        [x0, y0, 0.0],
        [x1, y0, 0.0],
        [x1, y1, 0.0],
        [x0, y1, 0.0],
    ]
}

/// Renders a notched border trace and its synthesized occluders to SVG:
/// tiles in black outline, margin occluders in blue, intrusion occluders in
/// red.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = BorderOccluder::new(4.0, 2.0);
    session.register(Direction::Start, square(0.0, 0.0, 2.0, 2.0));
    session.register(Direction::East, square(10.0, 0.0, 12.0, 2.0));
    session.register(Direction::North, square(10.0, 4.0, 12.0, 6.0));
    session.register(Direction::East, square(14.0, 4.0, 16.0, 6.0));
    session.register(Direction::North, square(14.0, 0.0, 16.0, 2.0));
    session.register(Direction::West, square(8.0, 0.0, 10.0, 2.0));

    let quads = session.analyze()?;

    let root = SVGBackend::new("border_occluders.svg", (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(-10.0..30.0, -15.0..25.0)?;

    // Draw the traced tiles
    for rec in session.trace().records() {
        let mut outline: Vec<(f64, f64)> = rec.corners.iter().map(|c| (c[0], c[1])).collect();
        outline.push(outline[0]);
        chart.draw_series(std::iter::once(PathElement::new(
            outline,
            BLACK.stroke_width(2),
        )))?;
    }

    // Draw the occluder quads
    for quad in &quads {
        let footprint: Vec<(f64, f64)> = quad.points.iter().map(|p| (p[0], p[1])).collect();
        let color = match quad.kind {
            OccluderKind::Margin { .. } => BLUE.mix(0.3),
            OccluderKind::Intrusion { .. } => RED.mix(0.3),
        };
        chart.draw_series(std::iter::once(Polygon::new(footprint.clone(), color)))?;

        let mut outline = footprint;
        outline.push(outline[0]);
        chart.draw_series(std::iter::once(PathElement::new(
            outline,
            BLACK.stroke_width(1),
        )))?;
    }

    root.present()?;
    println!("wrote border_occluders.svg with {} occluders", quads.len());
    for quad in &quads {
        println!("  {}", quad.name());
    }

    Ok(())
}
